//! Synchronous API client for an epidemiological tracker service.
//!
//! # Overview
//! Fetches confirmed/death/recovery counts from the tracker's REST API and
//! turns raw JSON into typed [`Report`] values. Two access patterns are
//! supported: the global latest snapshot, and a per-location snapshot either
//! at "latest" or at one specific historical date looked up in the
//! per-metric timelines.
//!
//! # Design
//! - `TrackerClient` is stateless — it holds only `base_url`, supplied
//!   explicitly at construction (or read once from `TRACKER_API`).
//! - Each endpoint is split into `build_*` (produces an [`HttpRequest`]) and
//!   `parse_*` (consumes an [`HttpResponse`]), so the I/O boundary is
//!   explicit and the transform logic stays deterministic and testable.
//! - [`transport::execute`] performs the actual GET and owns all diagnostic
//!   logging; non-2xx responses come back as plain data and only the parse
//!   step turns them into errors.
//! - Transport failures and schema failures are distinct [`TrackerError`]
//!   variants; "no report at this date" is `Ok(None)`, never an error.

pub mod client;
pub mod datekey;
pub mod error;
pub mod fetch;
pub mod http;
pub mod transport;
pub mod types;

pub use client::{report_at, TrackerClient};
pub use error::TrackerError;
pub use http::{HttpRequest, HttpResponse};
pub use types::{Latest, Location, Report, Timeline, Timelines};
