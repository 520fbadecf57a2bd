//! Upstream subsystem.
//!
//! # Data Flow
//! ```text
//! RouteKind::Proxy { upstream_path }
//!     → client.rs (build URL, fixed headers, GET/POST with timeout)
//!     → UpstreamResponse | error.rs (ProxyError)
//!     → http/response.rs (relay)
//! ```
//!
//! # Design Decisions
//! - Exactly one upstream, fixed at startup
//! - Inbound headers are dropped, never forwarded
//! - Timeouts are the only cancellation boundary

pub mod client;
pub mod error;

pub use client::{ForwardRequest, UpstreamClient, UpstreamResponse, CLIENT_ID};
pub use error::ProxyError;
