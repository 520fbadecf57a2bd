//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, dispatch)
//!     → request.rs (request ID)
//!     → [routing decides: preflight | proxy | static | 405]
//!     → response.rs (relay upstream result or error envelope)
//!     → security/headers.rs (CORS)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestIdExt, X_REQUEST_ID};
pub use response::{relay, ErrorBody, ErrorEnvelope, ErrorKind};
pub use server::{AppState, HttpServer, ServerError};
