//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Outgoing response (any handler, any status):
//!     → headers.rs (CORS decoration)
//!     → Send to client
//! ```
//!
//! # Design Decisions
//! - Applied as the outermost layer so nothing bypasses it
//! - Values are fixed; there is nothing to configure

pub mod headers;

pub use headers::{apply_cors, cors, CORS_HEADERS};
