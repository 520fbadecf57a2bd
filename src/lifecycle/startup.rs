//! Startup diagnostics.
//!
//! # Responsibilities
//! - Log what is being served and where requests are proxied
//! - Probe the upstream once and report reachability
//!
//! # Design Decisions
//! - Nothing here is fatal: an unreachable upstream is a warning and the
//!   server keeps serving static files

use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use crate::config::{DevServerConfig, UpstreamConfig};
use crate::upstream::UpstreamClient;

/// Endpoints the front end is expected to call, relative to the API prefix.
const DOCUMENTED_ENDPOINTS: [(&str, &str); 2] = [
    ("v1/models", "List available models"),
    ("v1/chat/completions", "Chat completions"),
];

/// Non-hidden regular files directly under `root`, sorted by name.
pub fn served_files(root: &Path) -> std::io::Result<Vec<(String, u64)>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let metadata = entry.metadata()?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if metadata.is_file() && !name.starts_with('.') {
            files.push((name, metadata.len()));
        }
    }
    files.sort();
    Ok(files)
}

/// Log the startup banner.
pub fn log_banner(addr: SocketAddr, config: &DevServerConfig) {
    tracing::info!(
        address = %addr,
        upstream = %config.upstream.base_url,
        root = %config.static_files.root.display(),
        "llm-devserver v{} ready",
        env!("CARGO_PKG_VERSION")
    );

    match served_files(&config.static_files.root) {
        Ok(files) => {
            for (name, size) in files {
                tracing::info!(file = %name, bytes = size, "Serving file");
            }
        }
        Err(e) => tracing::warn!(error = %e, "Could not list static root"),
    }

    for (path, description) in DOCUMENTED_ENDPOINTS {
        tracing::info!(
            endpoint = %format!("{}{}", config.upstream.api_prefix, path),
            "{description}"
        );
    }
}

/// One-shot reachability check against the upstream.
pub async fn probe_upstream(upstream: &UpstreamClient, config: &UpstreamConfig) {
    let timeout = Duration::from_secs(config.probe_timeout_secs);
    match upstream.probe(&config.probe_path, timeout).await {
        Ok(status) => tracing::info!(
            url = %upstream.target_url(&config.probe_path),
            status = status.as_u16(),
            "Upstream connectivity test passed"
        ),
        Err(e) => tracing::warn!(
            url = %upstream.target_url(&config.probe_path),
            error = %e,
            "Upstream connectivity test failed; the server will still start, but API calls may fail"
        ),
    }
}
