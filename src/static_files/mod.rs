//! Static asset serving.
//!
//! # Data Flow
//! ```text
//! RouteKind::Static
//!     → resolver.rs (ServeDir under the configured root)
//!     → mime.rs (pin content types for web assets)
//!     → Send to client
//! ```

pub mod mime;
pub mod resolver;

pub use resolver::StaticFiles;
