//! Error types for the tracker API client.
//!
//! # Design
//! Transport-level failures and schema-level failures get separate variants
//! so callers can tell "the service was unreachable or unhappy" apart from
//! "the service answered with a shape we do not understand". `NotFound` is
//! split out from `HttpStatus` because an unknown country id is a routine
//! condition, not a malfunction.

use std::fmt;

/// Errors returned by `TrackerClient` operations.
#[derive(Debug)]
pub enum TrackerError {
    /// The HTTP round trip itself failed (connection refused, DNS, ...).
    Transport(String),

    /// The server returned 404 — the requested location does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    HttpStatus { status: u16, body: String },

    /// The response body did not match the expected schema.
    Schema(String),

    /// A date string passed to the by-time lookup could not be parsed.
    InvalidDate(String),
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerError::Transport(msg) => write!(f, "transport failure: {msg}"),
            TrackerError::NotFound => write!(f, "location not found"),
            TrackerError::HttpStatus { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            TrackerError::Schema(msg) => write!(f, "schema validation failed: {msg}"),
            TrackerError::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
        }
    }
}

impl std::error::Error for TrackerError {}
