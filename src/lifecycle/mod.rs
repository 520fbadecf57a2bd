//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Bind → Banner → Probe upstream (background)
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain connections → Exit 0
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then listener, then traffic
//! - The upstream probe never blocks or fails startup

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
