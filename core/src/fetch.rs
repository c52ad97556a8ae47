//! Convenience resolvers composing build, execute and parse.
//!
//! Each resolver is a single linear request/validate/extract sequence; no
//! retries, no shared state between calls. The caller blocks until the HTTP
//! round trip and the parse complete.

use crate::client::{report_at, TrackerClient};
use crate::error::TrackerError;
use crate::transport;
use crate::types::Report;

impl TrackerClient {
    /// Fetch the global latest snapshot from the world-summary endpoint.
    pub fn get_world_latest(&self) -> Result<Report, TrackerError> {
        let response = transport::execute(&self.build_latest())?;
        self.parse_latest(response)
    }

    /// Fetch a per-location snapshot, either at "latest" (`time` absent) or
    /// at one specific historical date.
    ///
    /// Timelines are requested from the server only when a date is given.
    /// On the no-time path the result is always `Some(location.latest)`; on
    /// the dated path `Ok(None)` means no metric has data at that date.
    pub fn get_by_country(
        &self,
        country_id: u32,
        time: Option<&str>,
    ) -> Result<Option<Report>, TrackerError> {
        let want_timelines = time.is_some();
        let request = self.build_location(country_id, want_timelines);
        let response = transport::execute(&request)?;
        let location = self.parse_location(response, want_timelines)?;
        match time {
            None => Ok(Some(location.latest)),
            Some(time) => report_at(&location, time),
        }
    }
}
