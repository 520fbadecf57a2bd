//! Upstream failure taxonomy.

use thiserror::Error;

/// Why a proxied request produced no upstream response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProxyError {
    /// The upstream could not be reached: refused, DNS, timeout, reset.
    #[error("{0}")]
    Connection(String),

    /// Anything else that went wrong while proxying.
    #[error("{0}")]
    Internal(String),
}

impl ProxyError {
    pub fn connection(cause: impl std::fmt::Display) -> Self {
        Self::Connection(format!("Failed to connect to upstream: {cause}"))
    }

    pub fn internal(cause: impl std::fmt::Display) -> Self {
        Self::Internal(format!("Internal server error: {cause}"))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Connection(message) | Self::Internal(message) => message,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        // Builder errors never touched the network.
        if err.is_builder() {
            Self::internal(err)
        } else {
            Self::connection(err)
        }
    }
}
