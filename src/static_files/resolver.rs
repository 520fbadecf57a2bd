//! Delegation to the static file service.
//!
//! `ServeDir` resolves the path under the root, streams the file and owns
//! not-found and path sanitization. This wrapper only adjusts the content
//! type afterwards.

use std::path::Path;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::static_files::mime;

#[derive(Clone)]
pub struct StaticFiles {
    service: ServeDir,
}

impl StaticFiles {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let service = ServeDir::new(root.as_ref()).append_index_html_on_directories(true);
        Self { service }
    }

    /// Serve a request whose path is passed through unchanged.
    pub async fn serve(&self, request: Request<Body>) -> Response {
        let path = request.uri().path().to_owned();

        let response = match self.service.clone().oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };

        let mut response = response.map(Body::new);
        if response.status().is_success() {
            mime::apply_override(&path, response.headers_mut());
        }
        tracing::debug!(path = %path, status = response.status().as_u16(), "Static file served");
        response
    }
}
