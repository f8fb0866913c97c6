//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! programmatic builder  ──┐
//!                         ├─→ ApiConfig (ordered versions → ordered endpoints)
//! TOML skeleton file ─────┘        │
//!     (loader.rs)                  ├─→ validation.rs (semantic lint, warnings only)
//!                                  └─→ routing::resolver (consumes declaration order)
//! ```
//!
//! # Design Decisions
//! - Declaration order IS the version precedence order; versions are an
//!   ordered list of named records, not a keyed map
//! - All fields have defaults so minimal configs stay terse
//! - Handlers are opaque callbacks, never serialized; skeletons load from
//!   TOML with every handler unset
//! - Validation warns, never rejects: the binder degrades per endpoint

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_skeleton, ConfigError};
pub use schema::{handler_fn, ApiConfig, EndpointConfig, EndpointHandler, VersionConfig};
pub use validation::{validate, ValidationWarning};
