//! HTTP client for the upstream inference server.
//!
//! # Responsibilities
//! - Build the target URL from the base URL and the stripped path
//! - Replace inbound headers with a fixed minimal set
//! - Pick GET or POST and the matching timeout
//! - Return status and raw bytes, or a classified `ProxyError`

use std::time::Duration;

use axum::body::Bytes;
use axum::http::{HeaderMap, Method, StatusCode};
use reqwest::header::{HeaderValue, CONTENT_TYPE};

use crate::config::UpstreamConfig;
use crate::upstream::ProxyError;

/// Identifies this proxy to the upstream.
pub const CLIENT_ID: &str = concat!("llm-devserver/", env!("CARGO_PKG_VERSION"));

/// A request narrowed to what the proxy needs.
#[derive(Debug, Clone)]
pub struct ForwardRequest {
    pub method: Method,
    /// Path with the API prefix already removed.
    pub path: String,
    /// Inbound headers. Never sent upstream.
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// What came back from the upstream.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Client bound to a single upstream base URL.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
    get_timeout: Duration,
    post_timeout: Duration,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .user_agent(CLIENT_ID)
            .default_headers(headers)
            .no_proxy()
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            get_timeout: Duration::from_secs(config.get_timeout_secs),
            post_timeout: Duration::from_secs(config.post_timeout_secs),
        })
    }

    /// Target URL for a stripped path.
    pub fn target_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Forward a request and collect the full upstream response.
    pub async fn forward(&self, request: ForwardRequest) -> Result<UpstreamResponse, ProxyError> {
        let url = self.target_url(&request.path);

        tracing::info!(
            method = %request.method,
            path = %request.path,
            url = %url,
            "Proxying request"
        );
        tracing::debug!(dropped_headers = request.headers.len(), "Inbound headers not forwarded");

        let builder = if request.method == Method::POST && !request.body.is_empty() {
            self.client
                .post(&url)
                .body(request.body)
                .timeout(self.post_timeout)
        } else {
            self.client.get(&url).timeout(self.get_timeout)
        };

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        Ok(UpstreamResponse { status, body })
    }

    /// One-shot GET used to check reachability.
    pub async fn probe(&self, path: &str, timeout: Duration) -> Result<StatusCode, ProxyError> {
        let response = self
            .client
            .get(self.target_url(path))
            .timeout(timeout)
            .send()
            .await?;
        Ok(response.status())
    }
}
