//! Blocking HTTP executor for tracker requests.
//!
//! # Design
//! All diagnostic logging lives here, wrapped around the round trip, so the
//! build/parse logic in [`crate::client`] stays free of side effects. Status
//! codes are never treated as errors at this layer: a 4xx/5xx response comes
//! back as plain [`HttpResponse`] data for the caller to inspect, and only
//! the parse step converts it into a [`TrackerError`]. No retries, no
//! timeout override — the agent's defaults apply.

use log::{debug, warn};

use crate::error::TrackerError;
use crate::http::{HttpRequest, HttpResponse};

/// Execute a GET described by `request` and return the response as data.
///
/// Fails only on connection-level problems; an unhappy status code is not a
/// failure here.
pub fn execute(request: &HttpRequest) -> Result<HttpResponse, TrackerError> {
    let url = request.full_url();
    debug!("GET {url}");

    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = agent
        .get(&url)
        .call()
        .map_err(|e| TrackerError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| TrackerError::Transport(e.to_string()))?;

    if status >= 400 {
        warn!("GET {url} returned {status}");
    }
    debug!("response {status}:");
    log_body(&body);

    Ok(HttpResponse { status, body })
}

/// Log the response body, pretty-printed when it is valid JSON. A body that
/// fails to decode is logged verbatim; the fallback affects logging only,
/// never the returned value.
fn log_body(body: &str) {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => {
            let pretty = serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string());
            debug!("\t{pretty}");
        }
        Err(_) => debug!("\t{body}"),
    }
}
