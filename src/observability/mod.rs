//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → http/request.rs (request IDs for correlation)
//!     → TraceLayer spans per request
//! ```

pub mod logging;
