//! Stateless request builder and response parser for the tracker API.
//!
//! # Design
//! `TrackerClient` holds only a `base_url` and carries no mutable state
//! between calls. Each endpoint is split into a `build_*` method that
//! produces an [`HttpRequest`] and a `parse_*` method that consumes an
//! [`HttpResponse`]. The executor ([`crate::transport::execute`] or a test)
//! performs the round trip in between, keeping the transform logic
//! deterministic and free of I/O dependencies.

use crate::datekey;
use crate::error::TrackerError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Latest, Location, Report};

/// Base URL used by [`TrackerClient::from_env`] when `TRACKER_API` is unset.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8900";

/// Synchronous, stateless client for the tracker API.
///
/// Builds [`HttpRequest`] values and parses [`HttpResponse`] values without
/// touching the network; the convenience resolvers in [`crate::fetch`]
/// compose these with the blocking executor.
#[derive(Debug, Clone)]
pub struct TrackerClient {
    base_url: String,
}

impl TrackerClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL from `TRACKER_API`, falling back to the local
    /// loopback default. The variable is read once here; the client itself
    /// never consults the environment again.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("TRACKER_API").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }

    pub fn build_latest(&self) -> HttpRequest {
        HttpRequest {
            url: format!("{}/latest", self.base_url),
            query: Vec::new(),
        }
    }

    /// Parse the world-summary body `{ "latest": Report }`.
    pub fn parse_latest(&self, response: HttpResponse) -> Result<Report, TrackerError> {
        check_status(&response)?;
        let latest: Latest = serde_json::from_str(&response.body)
            .map_err(|e| TrackerError::Schema(e.to_string()))?;
        Ok(latest.latest)
    }

    /// Build the per-location request. `timelines` asks the server to embed
    /// the full per-metric history in the response.
    pub fn build_location(&self, country_id: u32, timelines: bool) -> HttpRequest {
        HttpRequest {
            url: format!("{}/locations/{country_id}", self.base_url),
            query: vec![("timelines".to_string(), timelines.to_string())],
        }
    }

    /// Parse the per-location body `{ "location": Location }`.
    ///
    /// When `timelines` is false, any `timelines` field in the payload is
    /// removed before the typed parse — it was not requested and must not
    /// participate in validation.
    pub fn parse_location(
        &self,
        response: HttpResponse,
        timelines: bool,
    ) -> Result<Location, TrackerError> {
        check_status(&response)?;
        let mut body: serde_json::Value = serde_json::from_str(&response.body)
            .map_err(|e| TrackerError::Schema(e.to_string()))?;
        let mut location = body
            .get_mut("location")
            .ok_or_else(|| TrackerError::Schema("missing `location` field".to_string()))?
            .take();
        if !timelines {
            if let Some(obj) = location.as_object_mut() {
                obj.remove("timelines");
            }
        }
        serde_json::from_value(location).map_err(|e| TrackerError::Schema(e.to_string()))
    }
}

/// Look up one specific date in a location's timelines.
///
/// Each metric is consulted independently; a miss in one metric leaves only
/// that field unset. Returns `Ok(None)` when the location carries no
/// timelines or no metric has data at that date — "no report for this date"
/// is an absence, not a failure. Exactly one date is supported, no ranges.
pub fn report_at(location: &Location, time: &str) -> Result<Option<Report>, TrackerError> {
    let key = datekey::normalize(time)?;
    let Some(timelines) = &location.timelines else {
        return Ok(None);
    };
    let report = Report {
        confirmed: timelines.confirmed.at(&key),
        deaths: timelines.deaths.at(&key),
        recovered: timelines.recovered.at(&key),
    };
    if report.has_data() {
        Ok(Some(report))
    } else {
        Ok(None)
    }
}

/// Map non-200 status codes to the appropriate `TrackerError` variant.
fn check_status(response: &HttpResponse) -> Result<(), TrackerError> {
    if response.status == 200 {
        return Ok(());
    }
    if response.status == 404 {
        return Err(TrackerError::NotFound);
    }
    Err(TrackerError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Timeline, Timelines};

    fn client() -> TrackerClient {
        TrackerClient::new("http://localhost:8900")
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            body: body.to_string(),
        }
    }

    fn timeline(entries: &[(&str, u64)]) -> Timeline {
        Timeline {
            timeline: entries.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }

    fn location_with_timelines() -> Location {
        Location {
            id: Some(16),
            country: Some("Italy".to_string()),
            country_code: Some("IT".to_string()),
            latest: Report {
                confirmed: Some(124632),
                deaths: Some(15362),
                recovered: Some(20996),
            },
            timelines: Some(Timelines {
                confirmed: timeline(&[
                    ("2020-04-04T00:00:00Z", 119827),
                    ("2020-04-05T00:00:00Z", 124632),
                ]),
                deaths: timeline(&[("2020-04-05T00:00:00Z", 15362)]),
                recovered: timeline(&[("2020-04-05T00:00:00Z", 20996)]),
            }),
        }
    }

    #[test]
    fn build_latest_produces_correct_request() {
        let req = client().build_latest();
        assert_eq!(req.url, "http://localhost:8900/latest");
        assert!(req.query.is_empty());
    }

    #[test]
    fn build_location_carries_the_timelines_flag() {
        let req = client().build_location(16, true);
        assert_eq!(req.url, "http://localhost:8900/locations/16");
        assert_eq!(
            req.query,
            vec![("timelines".to_string(), "true".to_string())]
        );
        assert_eq!(
            req.full_url(),
            "http://localhost:8900/locations/16?timelines=true"
        );

        let req = client().build_location(16, false);
        assert_eq!(
            req.query,
            vec![("timelines".to_string(), "false".to_string())]
        );
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TrackerClient::new("http://localhost:8900/");
        let req = client.build_latest();
        assert_eq!(req.url, "http://localhost:8900/latest");
    }

    #[test]
    fn parse_latest_success() {
        let report = client()
            .parse_latest(ok(
                r#"{"latest":{"confirmed":180000,"deaths":8000,"recovered":30000}}"#,
            ))
            .unwrap();
        assert_eq!(report.confirmed, Some(180000));
        assert_eq!(report.deaths, Some(8000));
        assert_eq!(report.recovered, Some(30000));
    }

    #[test]
    fn parse_latest_missing_field_is_schema_error() {
        let err = client()
            .parse_latest(ok(r#"{"confirmed":180000}"#))
            .unwrap_err();
        assert!(matches!(err, TrackerError::Schema(_)));
    }

    #[test]
    fn parse_latest_bad_json_is_schema_error() {
        let err = client().parse_latest(ok("not json")).unwrap_err();
        assert!(matches!(err, TrackerError::Schema(_)));
    }

    #[test]
    fn parse_latest_server_error_status() {
        let response = HttpResponse {
            status: 500,
            body: "internal error".to_string(),
        };
        let err = client().parse_latest(response).unwrap_err();
        assert!(matches!(err, TrackerError::HttpStatus { status: 500, .. }));
    }

    #[test]
    fn parse_location_success_without_timelines() {
        let body = r#"{"location":{"id":16,"country":"Italy","country_code":"IT",
            "latest":{"confirmed":124632,"deaths":15362,"recovered":20996}}}"#;
        let location = client().parse_location(ok(body), false).unwrap();
        assert_eq!(location.country.as_deref(), Some("Italy"));
        assert_eq!(location.latest.confirmed, Some(124632));
        assert!(location.timelines.is_none());
    }

    #[test]
    fn parse_location_strips_unrequested_timelines() {
        // Even if the server embeds timelines unasked, they are dropped
        // before validation when the caller did not request them.
        let body = r#"{"location":{
            "latest":{"confirmed":1},
            "timelines":{"confirmed":{"timeline":{}},"deaths":"malformed"}}}"#;
        let location = client().parse_location(ok(body), false).unwrap();
        assert!(location.timelines.is_none());
    }

    #[test]
    fn parse_location_with_timelines() {
        let body = r#"{"location":{
            "latest":{"confirmed":124632},
            "timelines":{
                "confirmed":{"timeline":{"2020-04-05T00:00:00Z":124632}},
                "deaths":{"timeline":{}},
                "recovered":{"timeline":{}}}}}"#;
        let location = client().parse_location(ok(body), true).unwrap();
        let timelines = location.timelines.unwrap();
        assert_eq!(timelines.confirmed.at("2020-04-05T00:00:00Z"), Some(124632));
        assert_eq!(timelines.deaths.at("2020-04-05T00:00:00Z"), None);
    }

    #[test]
    fn parse_location_missing_location_field() {
        let err = client()
            .parse_location(ok(r#"{"latest":{}}"#), false)
            .unwrap_err();
        assert!(matches!(err, TrackerError::Schema(_)));
    }

    #[test]
    fn parse_location_not_found() {
        let response = HttpResponse {
            status: 404,
            body: String::new(),
        };
        let err = client().parse_location(response, false).unwrap_err();
        assert!(matches!(err, TrackerError::NotFound));
    }

    #[test]
    fn report_at_full_hit() {
        let report = report_at(&location_with_timelines(), "2020-04-05")
            .unwrap()
            .unwrap();
        assert_eq!(
            report,
            Report {
                confirmed: Some(124632),
                deaths: Some(15362),
                recovered: Some(20996),
            }
        );
    }

    #[test]
    fn report_at_partial_hit_leaves_missing_metrics_unset() {
        let report = report_at(&location_with_timelines(), "2020-04-04")
            .unwrap()
            .unwrap();
        assert_eq!(report.confirmed, Some(119827));
        assert!(report.deaths.is_none());
        assert!(report.recovered.is_none());
    }

    #[test]
    fn report_at_miss_in_every_metric_is_none_not_error() {
        let result = report_at(&location_with_timelines(), "2019-12-31").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn report_at_accepts_a_time_of_day_suffix() {
        let report = report_at(&location_with_timelines(), "2020-04-05T12:30:00Z")
            .unwrap()
            .unwrap();
        assert_eq!(report.confirmed, Some(124632));
    }

    #[test]
    fn report_at_without_timelines_is_none() {
        let mut location = location_with_timelines();
        location.timelines = None;
        assert!(report_at(&location, "2020-04-05").unwrap().is_none());
    }

    #[test]
    fn report_at_rejects_unparseable_dates() {
        let err = report_at(&location_with_timelines(), "soon").unwrap_err();
        assert!(matches!(err, TrackerError::InvalidDate(_)));
    }
}
