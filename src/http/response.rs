//! Response relay.
//!
//! # Responsibilities
//! - Copy upstream status and bytes into the outbound response
//! - Force `Content-Type: application/json` on proxied responses
//! - Map `ProxyError` to 502/500 with a JSON error envelope
//!
//! # Design Decisions
//! - Upstream bodies are never re-encoded
//! - Error envelopes are the only bodies this crate synthesizes as JSON

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::upstream::{ProxyError, UpstreamResponse};

/// `{"error": {"message": ..., "type": ...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: ErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ConnectionError,
    ServerError,
}

impl ErrorEnvelope {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                message: message.into(),
                kind,
            },
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, kind) = match &self {
            ProxyError::Connection(_) => (StatusCode::BAD_GATEWAY, ErrorKind::ConnectionError),
            ProxyError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorKind::ServerError),
        };
        (status, Json(ErrorEnvelope::new(kind, self.message()))).into_response()
    }
}

/// Turn the outcome of an upstream call into the outbound response.
pub fn relay(result: Result<UpstreamResponse, ProxyError>) -> Response {
    match result {
        Ok(upstream) => {
            tracing::info!(
                status = upstream.status.as_u16(),
                bytes = upstream.body.len(),
                "Upstream response relayed"
            );
            (
                upstream.status,
                [(header::CONTENT_TYPE, "application/json")],
                upstream.body,
            )
                .into_response()
        }
        Err(err) => {
            match &err {
                ProxyError::Connection(message) => {
                    tracing::warn!(error = %message, "Upstream unreachable");
                }
                ProxyError::Internal(message) => {
                    tracing::error!(error = %message, "Proxy request failed");
                }
            }
            err.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Bytes};

    async fn body_of(response: Response) -> Bytes {
        to_bytes(response.into_body(), usize::MAX).await.unwrap()
    }

    #[test]
    fn envelope_wire_format() {
        let envelope = ErrorEnvelope::new(ErrorKind::ConnectionError, "down");
        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            r#"{"error":{"message":"down","type":"connection_error"}}"#
        );

        let envelope = ErrorEnvelope::new(ErrorKind::ServerError, "boom");
        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            r#"{"error":{"message":"boom","type":"server_error"}}"#
        );
    }

    #[tokio::test]
    async fn relays_status_and_bytes_verbatim() {
        let response = relay(Ok(UpstreamResponse {
            status: StatusCode::NOT_FOUND,
            body: Bytes::from_static(b"model not loaded"),
        }));

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(body_of(response).await, "model not loaded");
    }

    #[tokio::test]
    async fn connection_error_is_502() {
        let response = relay(Err(ProxyError::Connection("refused".into())));

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(
            body_of(response).await,
            r#"{"error":{"message":"refused","type":"connection_error"}}"#
        );
    }

    #[tokio::test]
    async fn internal_error_is_500() {
        let response = relay(Err(ProxyError::Internal("bad body".into())));

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let envelope: ErrorEnvelope = serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(envelope, ErrorEnvelope::new(ErrorKind::ServerError, "bad body"));
    }
}
