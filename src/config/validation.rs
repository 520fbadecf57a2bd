//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses, URLs and value ranges
//! - Check the static root exists
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: DevServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::DevServerConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a socket address")]
    BindAddress(String),

    #[error("upstream.base_url '{0}' is not a valid http(s) URL")]
    BaseUrl(String),

    #[error("upstream.api_prefix '{0}' must start and end with '/' and name a segment")]
    ApiPrefix(String),

    #[error("{0} must be greater than zero")]
    ZeroValue(&'static str),

    #[error("static_files.root '{0}' is not a directory")]
    StaticRoot(String),
}

/// Validate a fully merged configuration.
pub fn validate_config(config: &DevServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let upstream = &config.upstream;
    match Url::parse(&upstream.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {}
        _ => errors.push(ValidationError::BaseUrl(upstream.base_url.clone())),
    }

    let prefix = &upstream.api_prefix;
    if prefix.len() < 3 || !prefix.starts_with('/') || !prefix.ends_with('/') {
        errors.push(ValidationError::ApiPrefix(prefix.clone()));
    }

    for (name, value) in [
        ("upstream.get_timeout_secs", upstream.get_timeout_secs),
        ("upstream.post_timeout_secs", upstream.post_timeout_secs),
        ("upstream.probe_timeout_secs", upstream.probe_timeout_secs),
    ] {
        if value == 0 {
            errors.push(ValidationError::ZeroValue(name));
        }
    }

    if config.limits.max_body_size == 0 {
        errors.push(ValidationError::ZeroValue("limits.max_body_size"));
    }

    if !config.static_files.root.is_dir() {
        errors.push(ValidationError::StaticRoot(
            config.static_files.root.display().to_string(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
