//! MIME overrides for web app assets.
//!
//! The resolver guesses content types on its own; these extensions are
//! pinned so browsers always get the types the front end expects.

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue};

/// Pinned content type for a request path, if any.
pub fn override_for(path: &str) -> Option<&'static str> {
    match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("js") => Some("application/javascript"),
        Some("css") => Some("text/css"),
        Some("json") => Some("application/json"),
        Some("svg") => Some("image/svg+xml"),
        Some("webp") => Some("image/webp"),
        _ => None,
    }
}

/// Replace the resolver's guess when the path has a pinned type.
pub fn apply_override(path: &str, headers: &mut HeaderMap) {
    if let Some(mime) = override_for(path) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(mime));
    }
}
