//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → command-line overrides (main.rs)
//!     → validation.rs (semantic checks)
//!     → DevServerConfig (validated, immutable)
//!     → handed to the router, upstream client and static resolver
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{read_config, ConfigError};
pub use schema::{
    DevServerConfig, LimitsConfig, ListenerConfig, ObservabilityConfig, StaticFilesConfig,
    UpstreamConfig,
};
pub use validation::{validate_config, ValidationError};
