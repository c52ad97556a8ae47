//! HTTP transport types, described as plain data.
//!
//! # Design
//! The client builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network; [`crate::transport::execute`] (or a test)
//! performs the round trip in between. The upstream API is GET-only, so a
//! request is just a URL plus query parameters.

/// A GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Absolute URL without the query string.
    pub url: String,
    /// Query parameters, encoded by [`HttpRequest::full_url`].
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// The complete target URL with the query string appended.
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        let pairs: Vec<String> = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        format!("{}?{}", self.url, pairs.join("&"))
    }
}

/// An HTTP response described as plain data.
///
/// Constructed by the executor after the round trip, then handed to the
/// `parse_*` methods. A non-2xx status is carried here as data; it only
/// becomes an error during parsing.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
