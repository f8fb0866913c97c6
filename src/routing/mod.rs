//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! ApiConfig (ordered versions)
//!     → resolver.rs (inheritance, overrides, dedup)
//!     → ResolvedTable (version → endpoint list, immutable)
//!     → binder.rs (method check, /{version}{path}, registration)
//!     → RouteRegistrar (axum Router or a recording stand-in)
//! ```
//!
//! # Design Decisions
//! - The table is fully built before any binding happens; the two passes
//!   never interleave
//! - Later active versions inherit the previous active version's
//!   non-deprecated endpoints; own declarations override by (path, method)
//! - Per-endpoint failures degrade that endpoint only, never the table

pub mod binder;
pub mod endpoint;
pub mod method;
pub mod resolver;

pub use binder::{bind, AxumRegistrar, BoundRoute, RecordedRoute, RecordingRegistrar, RouteRegistrar};
pub use endpoint::{Endpoint, ResolvedTable, ResolvedVersion};
pub use method::HttpMethod;
pub use resolver::resolve;
