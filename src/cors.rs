//! CORS allow-list for the local web frontend.
//!
//! The dev server of the web app runs on port 4200 and calls this backend
//! cross-origin. Those two origins are echoed back. Any other origin gets no
//! CORS headers at all, and the browser blocks the read. That is the policy,
//! not an error.

use http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN, VARY,
};
use http::{HeaderMap, HeaderValue};

pub const ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:4200", "http://127.0.0.1:4200"];

pub const ALLOW_METHODS: &str = "GET, HEAD, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Accept";

/// Returns the allow-listed origin matching `origin` exactly, if any.
pub fn allowed_origin(origin: &str) -> Option<&'static str> {
    ALLOWED_ORIGINS.iter().copied().find(|allowed| *allowed == origin)
}

/// Applies the CORS policy for a request carrying `origin` to `headers`.
///
/// Idempotent: values are inserted, never appended, so applying it from
/// both the middleware and the handler leaves one copy of each header.
pub fn apply(origin: Option<&str>, headers: &mut HeaderMap) {
    let Some(origin) = origin.and_then(allowed_origin) else {
        return;
    };
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static(origin));
    headers.insert(VARY, HeaderValue::from_static("Origin"));
    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS));
}
