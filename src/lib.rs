//! Versioned HTTP API route tables, resolved and bound onto axum.
//!
//! A nested configuration declares API versions in order, each with its
//! endpoints. Resolution produces a table where every active version
//! inherits the previous active version's non-deprecated endpoints, with
//! own declarations overriding by `(path, method)`. Binding mounts each
//! resolved endpoint at `/{version}{path}` on a routing capability.
//!
//! ```no_run
//! use axum::response::IntoResponse;
//! use versioned_router::{handler_fn, ApiConfig, EndpointConfig, VersionConfig};
//!
//! let config = ApiConfig::new()
//!     .version(
//!         VersionConfig::new("v1")
//!             .endpoint(
//!                 EndpointConfig::get("/users")
//!                     .handler(handler_fn(|v, _req| async move {
//!                         format!("users as of {v}").into_response()
//!                     })),
//!             ),
//!     )
//!     // v2 inherits /users automatically
//!     .version(VersionConfig::new("v2"));
//!
//! let router = versioned_router::resolve_and_bind(&config);
//! # let _ = router;
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod routing;

pub use config::loader::{load_skeleton, ConfigError};
pub use config::schema::{handler_fn, ApiConfig, EndpointConfig, EndpointHandler, VersionConfig};
pub use config::validation::{validate, ValidationWarning};
pub use diagnostics::{DiagnosticsSink, NoopSink, RecordingSink, TracingSink};
pub use error::RouteError;
pub use routing::binder::{bind, AxumRegistrar, BoundRoute, RecordingRegistrar, RouteRegistrar};
pub use routing::endpoint::{Endpoint, ResolvedTable, ResolvedVersion};
pub use routing::method::HttpMethod;
pub use routing::resolver::resolve;

/// Resolve a configuration and bind it onto a fresh axum [`Router`], with
/// diagnostics discarded.
///
/// [`Router`]: axum::Router
pub fn resolve_and_bind(config: &ApiConfig) -> axum::Router {
    resolve_and_bind_with(config, AxumRegistrar::new(), &NoopSink).into_router()
}

/// Like [`resolve_and_bind`], emitting diagnostics through `tracing` when
/// `logging` is true. No global logger state is touched either way.
pub fn resolve_and_bind_with_logging(config: &ApiConfig, logging: bool) -> axum::Router {
    let registrar = if logging {
        resolve_and_bind_with(config, AxumRegistrar::new(), &TracingSink)
    } else {
        resolve_and_bind_with(config, AxumRegistrar::new(), &NoopSink)
    };
    registrar.into_router()
}

/// Fully injected variant: resolve, lint, and bind onto the given registrar
/// with the given diagnostics sink.
pub fn resolve_and_bind_with<R: RouteRegistrar>(
    config: &ApiConfig,
    registrar: R,
    sink: &dyn DiagnosticsSink,
) -> R {
    for warning in config::validation::validate(config) {
        sink.config_warning(&warning);
    }
    let table = routing::resolver::resolve(config);
    routing::binder::bind(&table, registrar, sink)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_point_reports_warnings_then_binds() {
        let config = ApiConfig::new().version(
            VersionConfig::new("v1")
                .endpoint(EndpointConfig::get("/ok"))
                .endpoint(EndpointConfig::new("/odd", "FETCH")),
        );

        let sink = RecordingSink::default();
        let registrar = resolve_and_bind_with(&config, RecordingRegistrar::new(), &sink);

        assert_eq!(sink.warnings().len(), 1);
        assert_eq!(sink.skipped().len(), 1);
        assert_eq!(registrar.routes.len(), 1);
        assert_eq!(registrar.routes[0].path, "/v1/ok");
    }
}
