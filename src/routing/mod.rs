//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (classify)
//!     → matcher.rs (API prefix match & strip)
//!     → Return: RouteKind
//! ```
//!
//! # Design Decisions
//! - Router built at startup, immutable at runtime
//! - Prefix matching only
//! - Deterministic: same input always yields the same RouteKind

pub mod matcher;
pub mod router;

pub use matcher::PathPrefixMatcher;
pub use router::{RequestRouter, RouteKind};
