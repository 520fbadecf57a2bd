//! Cross-origin response headers.
//!
//! Every response leaving the server gets the same permissive CORS set,
//! whether it was served from disk, relayed from the upstream, synthesized
//! as an error, or a pre-flight.

use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_MAX_AGE,
};
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use axum::response::Response;

pub const CORS_HEADERS: [(HeaderName, &str); 4] = [
    (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, PUT, DELETE, OPTIONS"),
    (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type, Authorization"),
    (ACCESS_CONTROL_MAX_AGE, "86400"),
];

/// Set the CORS headers, replacing any existing values.
pub fn apply_cors(headers: &mut HeaderMap) {
    for (name, value) in CORS_HEADERS {
        headers.insert(name, HeaderValue::from_static(value));
    }
}

/// Response mapper for `axum::middleware::map_response`.
pub async fn cors(mut response: Response) -> Response {
    apply_cors(response.headers_mut());
    response
}
