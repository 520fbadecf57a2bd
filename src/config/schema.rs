//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the dev server.
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the dev server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DevServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream inference server and proxy behaviour.
    pub upstream: UpstreamConfig,

    /// Static asset serving.
    pub static_files: StaticFilesConfig,

    /// Request limits.
    pub limits: LimitsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
        }
    }
}

/// Upstream configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the inference server (e.g., "http://127.0.0.1:1234").
    pub base_url: String,

    /// Path prefix that selects proxying instead of static serving.
    pub api_prefix: String,

    /// Timeout for GET requests (and POSTs without a body) in seconds.
    pub get_timeout_secs: u64,

    /// Timeout for POST requests carrying a body in seconds.
    pub post_timeout_secs: u64,

    /// Probe the upstream once at startup.
    pub startup_probe: bool,

    /// Path probed at startup, relative to `base_url`.
    pub probe_path: String,

    /// Startup probe timeout in seconds.
    pub probe_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:1234".to_string(),
            api_prefix: "/api/".to_string(),
            get_timeout_secs: 10,
            post_timeout_secs: 60,
            startup_probe: true,
            probe_path: "v1/models".to_string(),
            probe_timeout_secs: 5,
        }
    }
}

/// Static file configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directory served for non-API GET requests.
    pub root: PathBuf,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

/// Request limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum inbound body size in bytes.
    pub max_body_size: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_size: 10 * 1024 * 1024, // 10MB
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
