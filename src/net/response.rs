//! Minimal HTTP response model.
//!
//! This struct represents a **fully buffered** HTTP response returned by
//! [`fetch`](crate::net::fetch). It contains the final URL (after redirects,
//! if the client follows them), status code + reason, response headers, and
//! the raw body bytes. The underlying connection is already released by the
//! time a `Response` exists.
//!
//! ## Notes
//! - The status is informational only. A `404` body is checked the same way
//!   as a `200` body.
//! - `headers` is an `http::HeaderMap`, which is **case-insensitive** for
//!   header names.
use http::HeaderMap;

#[derive(Debug)]
pub struct Response {
    /// Final URL of the response (after redirects, if any).
    pub url: url::Url,

    /// Numeric HTTP status code (e.g., `200`, `404`).
    pub status: u16,

    /// Human-readable reason phrase (e.g., `"OK"`, `"Not Found"`).
    ///
    /// May be `"Unknown"` for non-standard codes.
    pub status_text: String,

    /// Response headers as a case-insensitive map.
    pub headers: HeaderMap,

    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl Response {
    /// Body decoded as text. Invalid UTF-8 sequences become U+FFFD.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
