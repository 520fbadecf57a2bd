//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::State,
    http::{header, HeaderMap, Method, Request, StatusCode},
    response::IntoResponse,
    Router,
};
use tokio::net::TcpListener;

use llm_devserver::{DevServerConfig, HttpServer, Shutdown};

/// A request as seen by the mock upstream.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct Captured {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    content_type: &'static str,
    body: &'static str,
    delay: Duration,
    captured: Arc<Mutex<Vec<Captured>>>,
}

/// Handle to a running mock upstream.
#[derive(Clone)]
pub struct MockUpstream {
    pub addr: SocketAddr,
    captured: Arc<Mutex<Vec<Captured>>>,
}

#[allow(dead_code)]
impl MockUpstream {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<Captured> {
        self.captured.lock().unwrap().clone()
    }
}

async fn mock_handler(State(state): State<MockState>, request: Request<Body>) -> impl IntoResponse {
    let (parts, body) = request.into_parts();
    let body = to_bytes(body, usize::MAX).await.unwrap_or_default();
    state.captured.lock().unwrap().push(Captured {
        method: parts.method,
        path: parts.uri.path().to_string(),
        headers: parts.headers,
        body,
    });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    (
        state.status,
        [(header::CONTENT_TYPE, state.content_type)],
        state.body,
    )
}

/// Start a mock upstream that records requests and answers with a fixed response.
pub async fn start_mock_upstream(
    status: u16,
    content_type: &'static str,
    body: &'static str,
    delay: Duration,
) -> MockUpstream {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let captured = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new().fallback(mock_handler).with_state(MockState {
        status: StatusCode::from_u16(status).unwrap(),
        content_type,
        body,
        delay,
        captured: captured.clone(),
    });

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockUpstream { addr, captured }
}

/// An address nothing is listening on.
#[allow(dead_code)]
pub async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Config pointing at `base_url` and serving `root`, with the startup probe off.
pub fn test_config(base_url: &str, root: &Path) -> DevServerConfig {
    let mut config = DevServerConfig::default();
    config.listener.bind_address = "127.0.0.1:0".to_string();
    config.upstream.base_url = base_url.to_string();
    config.upstream.startup_probe = false;
    config.static_files.root = root.to_path_buf();
    config
}

/// Start the dev server on an ephemeral port.
pub async fn start_devserver(config: DevServerConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config).unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

/// Assert the four CORS headers are present with their exact values.
pub fn assert_cors(response: &reqwest::Response) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(
        headers["access-control-allow-methods"],
        "GET, POST, PUT, DELETE, OPTIONS"
    );
    assert_eq!(
        headers["access-control-allow-headers"],
        "Content-Type, Authorization"
    );
    assert_eq!(headers["access-control-max-age"], "86400");
}
