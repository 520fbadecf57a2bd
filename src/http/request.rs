//! Request identification.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) for each inbound request
//! - Echo it back on the response as `x-request-id`
//! - Expose it to handlers for log correlation
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - A client-supplied `x-request-id` is kept rather than replaced

use axum::http::{HeaderName, Request};
use tower_http::request_id::{
    MakeRequestUuid, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Layer that assigns request IDs.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuid)
}

/// Layer that copies the request ID onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(X_REQUEST_ID)
}

/// Convenience accessor for the ID assigned by [`set_request_id_layer`].
pub trait RequestIdExt {
    fn request_id(&self) -> &str;
}

impl<B> RequestIdExt for Request<B> {
    fn request_id(&self) -> &str {
        self.extensions()
            .get::<RequestId>()
            .and_then(|id| id.header_value().to_str().ok())
            .unwrap_or("unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn missing_id_reads_as_unknown() {
        let req = Request::builder().body(()).unwrap();
        assert_eq!(req.request_id(), "unknown");
    }

    #[test]
    fn reads_id_from_extensions() {
        let mut req = Request::builder().body(()).unwrap();
        req.extensions_mut()
            .insert(RequestId::new(HeaderValue::from_static("abc-123")));
        assert_eq!(req.request_id(), "abc-123");
    }
}
