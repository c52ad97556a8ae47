//! Canonical date-key normalization for timeline lookups.
//!
//! The upstream timelines are keyed per day at UTC midnight, rendered as
//! `YYYY-MM-DDT00:00:00Z`. User input may carry a time-of-day or timezone
//! suffix; only the leading calendar date matters for the lookup.
//!
//! The ten leading characters are parsed with `%Y-%m-%d` — a real calendar
//! month, not a minute field. Inputs whose date portion cannot be parsed as
//! a calendar date are rejected rather than silently mapped to a different
//! day.

use chrono::NaiveDate;

use crate::error::TrackerError;

const INPUT_FORMAT: &str = "%Y-%m-%d";
const KEY_FORMAT: &str = "%Y-%m-%dT00:00:00Z";

/// Normalize a user-supplied date string into the upstream timeline key.
///
/// Takes only the first 10 characters of the input, discarding any
/// time-of-day or timezone suffix, and re-renders the date as
/// `YYYY-MM-DDT00:00:00Z`.
pub fn normalize(time: &str) -> Result<String, TrackerError> {
    let day: String = time.chars().take(10).collect();
    let date = NaiveDate::parse_from_str(&day, INPUT_FORMAT)
        .map_err(|e| TrackerError::InvalidDate(format!("{day:?}: {e}")))?;
    Ok(date.format(KEY_FORMAT).to_string())
}
