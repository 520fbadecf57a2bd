//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with a single dispatching handler
//! - Wire up middleware (CORS, tracing, body limit, request ID)
//! - Bind server to listener
//! - Dispatch requests by route kind
//! - Forward proxied requests to the upstream
//! - Start the one-shot upstream probe

use axum::{
    body::{to_bytes, Body},
    extract::State,
    http::{Request, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::config::DevServerConfig;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, RequestIdExt};
use crate::http::response::relay;
use crate::lifecycle::startup;
use crate::routing::{RequestRouter, RouteKind};
use crate::security;
use crate::static_files::StaticFiles;
use crate::upstream::{ForwardRequest, ProxyError, UpstreamClient};

/// Errors that stop the server as a whole.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to build upstream client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<RequestRouter>,
    pub upstream: UpstreamClient,
    pub static_files: StaticFiles,
}

/// HTTP server for the dev server.
pub struct HttpServer {
    router: Router,
    config: DevServerConfig,
    upstream: UpstreamClient,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: DevServerConfig) -> Result<Self, ServerError> {
        let upstream = UpstreamClient::new(&config.upstream)?;

        let state = AppState {
            router: Arc::new(RequestRouter::new(config.upstream.api_prefix.clone())),
            upstream: upstream.clone(),
            static_files: StaticFiles::new(&config.static_files.root),
        };

        let router = Self::build_router(&config, state);
        Ok(Self {
            router,
            config,
            upstream,
        })
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// CORS is added last so it wraps everything, including 413s from the
    /// body limit.
    fn build_router(config: &DevServerConfig, state: AppState) -> Router {
        Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http())
            .layer(set_request_id_layer())
            .layer(middleware::map_response(security::cors))
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        if self.config.upstream.startup_probe {
            let upstream = self.upstream.clone();
            let config = self.config.upstream.clone();
            tokio::spawn(async move {
                startup::probe_upstream(&upstream, &config).await;
            });
        }

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Single entry point for every request.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let route = state
        .router
        .classify(request.method(), request.uri().path());

    tracing::debug!(
        request_id = %request.request_id(),
        method = %request.method(),
        path = %request.uri().path(),
        route = ?route,
        "Request classified"
    );

    match route {
        RouteKind::Preflight => StatusCode::OK.into_response(),
        RouteKind::Proxy { upstream_path } => {
            proxy(&state.upstream, upstream_path, request).await
        }
        RouteKind::Static => state.static_files.serve(request).await,
        RouteKind::MethodNotAllowed => {
            tracing::warn!(
                method = %request.method(),
                path = %request.uri().path(),
                "Method not allowed"
            );
            (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed").into_response()
        }
    }
}

/// Read the inbound body, forward it, relay the outcome.
async fn proxy(
    upstream: &UpstreamClient,
    upstream_path: String,
    request: Request<Body>,
) -> Response {
    let (parts, body) = request.into_parts();

    // The body limit layer already bounds what can arrive here.
    let body = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => return relay(Err(ProxyError::internal(e))),
    };

    let result = upstream
        .forward(ForwardRequest {
            method: parts.method,
            path: upstream_path,
            headers: parts.headers,
            body,
        })
        .await;

    relay(result)
}
