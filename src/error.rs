//! Routing error definitions.

use thiserror::Error;

/// Errors raised while turning resolved endpoints into live routes.
///
/// All variants are per-endpoint and non-fatal: the binder reports them
/// through the diagnostics sink and keeps processing sibling endpoints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The endpoint's method string is not one of the supported verbs.
    #[error("unrecognized HTTP method \"{0}\" (expected GET, POST, PUT or DELETE)")]
    UnrecognizedMethod(String),
}
