//! TCP listener binding.
//!
//! # Responsibilities
//! - Parse and bind the configured address
//! - Tell "address already in use" apart from other bind failures

use std::io::ErrorKind;
use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The configured address does not parse.
    #[error("invalid bind address '{address}': {source}")]
    Address {
        address: String,
        source: std::net::AddrParseError,
    },

    /// Another process owns the port.
    #[error("port {} is already in use", .0.port())]
    AddrInUse(SocketAddr),

    /// Any other bind failure.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
}

/// Bind to the configured address.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, ListenerError> {
    let addr: SocketAddr =
        config
            .bind_address
            .parse()
            .map_err(|source| ListenerError::Address {
                address: config.bind_address.clone(),
                source,
            })?;

    let listener = TcpListener::bind(addr).await.map_err(|source| {
        if source.kind() == ErrorKind::AddrInUse {
            ListenerError::AddrInUse(addr)
        } else {
            ListenerError::Bind { addr, source }
        }
    })?;

    tracing::info!(
        address = %listener.local_addr().unwrap_or(addr),
        "Listener bound"
    );

    Ok(listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(bind_address: &str) -> ListenerConfig {
        ListenerConfig {
            bind_address: bind_address.to_string(),
        }
    }

    #[tokio::test]
    async fn binds_ephemeral_port() {
        let listener = bind(&config("127.0.0.1:0")).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn reports_address_in_use() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = taken.local_addr().unwrap();

        let err = bind(&config(&addr.to_string())).await.unwrap_err();
        assert!(matches!(err, ListenerError::AddrInUse(a) if a == addr));
        assert!(err.to_string().contains("already in use"));
    }

    #[tokio::test]
    async fn reports_unparsable_address() {
        let err = bind(&config("localhost:5000")).await.unwrap_err();
        assert!(matches!(err, ListenerError::Address { .. }));
    }
}
