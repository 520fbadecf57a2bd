//! Local development server: static assets plus a reverse proxy to a single
//! upstream inference server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──▶ net (listener) ──▶ http (server) ──▶ routing (RouteKind)
//!                                                  │
//!              ┌──────────────┬────────────────────┼──────────────┐
//!              ▼              ▼                    ▼              ▼
//!          Preflight     static_files          upstream     MethodNotAllowed
//!          (200, empty)  (ServeDir + MIME)     (client) ──▶ Upstream server
//!              │              │                    │              │
//!              │              │              http/response        │
//!              │              │              (relay/envelope)     │
//!              └──────────────┴─────────┬──────────┴──────────────┘
//!                                       ▼
//!     Client Response ◀──────── security (CORS headers)
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod routing;
pub mod security;
pub mod static_files;
pub mod upstream;

pub use config::DevServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
