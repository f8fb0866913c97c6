//! Diagnostics subsystem.
//!
//! # Data Flow
//! ```text
//! resolver / binder / entry points
//!     → DiagnosticsSink (injected per call)
//!         → NoopSink      (default: silence)
//!         → TracingSink   (forward to `tracing` events)
//!         → RecordingSink (capture for assertions)
//! ```
//!
//! # Design Decisions
//! - The sink is an explicit parameter, never a global: toggling diagnostics
//!   on one call cannot affect another table being built elsewhere
//! - Skips and missing handlers are reported, never escalated; the binder's
//!   output is best-effort by design

use std::sync::Mutex;

use crate::config::validation::ValidationWarning;
use crate::error::RouteError;
use crate::routing::method::HttpMethod;

/// Receiver for per-endpoint events produced while a table is resolved and
/// bound.
pub trait DiagnosticsSink {
    /// A route was mounted at `route_path` under `method`.
    fn route_registered(&self, method: HttpMethod, route_path: &str, api_version: &str);

    /// An endpoint was omitted from routing.
    fn endpoint_skipped(&self, api_version: &str, path: &str, error: &RouteError);

    /// An endpoint was bound without an implementation callback.
    fn handler_missing(&self, api_version: &str, path: &str);

    /// A configuration lint finding.
    fn config_warning(&self, warning: &ValidationWarning);
}

/// Discards every event. The default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticsSink for NoopSink {
    fn route_registered(&self, _: HttpMethod, _: &str, _: &str) {}
    fn endpoint_skipped(&self, _: &str, _: &str, _: &RouteError) {}
    fn handler_missing(&self, _: &str, _: &str) {}
    fn config_warning(&self, _: &ValidationWarning) {}
}

/// Forwards every event to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn route_registered(&self, method: HttpMethod, route_path: &str, api_version: &str) {
        tracing::info!(%method, route = %route_path, version = %api_version, "route registered");
    }

    fn endpoint_skipped(&self, api_version: &str, path: &str, error: &RouteError) {
        tracing::warn!(version = %api_version, %path, %error, "endpoint skipped");
    }

    fn handler_missing(&self, api_version: &str, path: &str) {
        tracing::warn!(version = %api_version, %path, "endpoint has no handler; binding 501 responder");
    }

    fn config_warning(&self, warning: &ValidationWarning) {
        tracing::warn!(%warning, "configuration warning");
    }
}

/// Captures events for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    registered: Mutex<Vec<(HttpMethod, String, String)>>,
    skipped: Mutex<Vec<(String, String, RouteError)>>,
    missing: Mutex<Vec<(String, String)>>,
    warnings: Mutex<Vec<ValidationWarning>>,
}

impl RecordingSink {
    pub fn registered(&self) -> Vec<(HttpMethod, String, String)> {
        self.registered.lock().unwrap().clone()
    }

    pub fn skipped(&self) -> Vec<(String, String, RouteError)> {
        self.skipped.lock().unwrap().clone()
    }

    pub fn missing_handlers(&self) -> Vec<(String, String)> {
        self.missing.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<ValidationWarning> {
        self.warnings.lock().unwrap().clone()
    }
}

impl DiagnosticsSink for RecordingSink {
    fn route_registered(&self, method: HttpMethod, route_path: &str, api_version: &str) {
        self.registered
            .lock()
            .unwrap()
            .push((method, route_path.to_string(), api_version.to_string()));
    }

    fn endpoint_skipped(&self, api_version: &str, path: &str, error: &RouteError) {
        self.skipped
            .lock()
            .unwrap()
            .push((api_version.to_string(), path.to_string(), error.clone()));
    }

    fn handler_missing(&self, api_version: &str, path: &str) {
        self.missing
            .lock()
            .unwrap()
            .push((api_version.to_string(), path.to_string()));
    }

    fn config_warning(&self, warning: &ValidationWarning) {
        self.warnings.lock().unwrap().push(warning.clone());
    }
}

/// Install a console tracing subscriber for binaries and demos.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_console_logging() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "versioned_router=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
