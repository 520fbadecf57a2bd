//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! listener.rs (bind, classify bind errors)
//!     → axum::serve (accept loop, one task per connection)
//!     → Hand off to HTTP layer
//! ```
//!
//! # Design Decisions
//! - Connection tasks are independent; a slow upstream call only holds its
//!   own task

pub mod listener;

pub use listener::{bind, ListenerError};
