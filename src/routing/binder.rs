//! Route binding onto a registrar capability.
//!
//! # Responsibilities
//! - Walk the resolved table in order (version order, then list order)
//! - Build each route path as `/{api_version}{path}`
//! - Reject unrecognized methods per endpoint, continuing with siblings
//! - Register handlers on an injected [`RouteRegistrar`]
//!
//! # Design Decisions
//! - The registrar is an explicit value threaded through the call, not a
//!   global; tests register independent tables side by side
//! - A missing handler binds an inert 501 responder so the route surface
//!   still mirrors the resolved table
//! - No failure in one endpoint aborts the rest; the caller always gets a
//!   best-effort registrar back

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::config::schema::EndpointHandler;
use crate::diagnostics::DiagnosticsSink;
use crate::routing::endpoint::ResolvedTable;
use crate::routing::method::HttpMethod;

/// Everything a registrar needs to mount one route.
#[derive(Clone)]
pub struct BoundRoute {
    /// Version the handler is invoked with.
    pub api_version: String,

    /// Implementation callback; `None` mounts the inert responder.
    pub handler: Option<EndpointHandler>,
}

/// Routing capability: accepts "register handler for (method, path)".
pub trait RouteRegistrar {
    fn register(&mut self, method: HttpMethod, path: &str, route: BoundRoute);
}

/// Register every endpoint of a resolved table, in table order.
///
/// Endpoints whose method string is unrecognized are reported through the
/// sink and skipped; everything else still binds.
pub fn bind<R: RouteRegistrar>(
    table: &ResolvedTable,
    mut registrar: R,
    sink: &dyn DiagnosticsSink,
) -> R {
    for version in table.versions() {
        for endpoint in &version.endpoints {
            let method = match endpoint.config.method.parse::<HttpMethod>() {
                Ok(method) => method,
                Err(error) => {
                    tracing::warn!(
                        version = %endpoint.api_version,
                        path = %endpoint.path,
                        %error,
                        "skipping endpoint"
                    );
                    sink.endpoint_skipped(&endpoint.api_version, &endpoint.path, &error);
                    continue;
                }
            };

            let path = endpoint.route_path();
            if endpoint.config.handler.is_none() {
                sink.handler_missing(&endpoint.api_version, &endpoint.path);
            }
            sink.route_registered(method, &path, &endpoint.api_version);

            registrar.register(
                method,
                &path,
                BoundRoute {
                    api_version: endpoint.api_version.clone(),
                    handler: endpoint.config.handler.clone(),
                },
            );
        }
    }

    registrar
}

/// Registrar backed by an [`axum::Router`].
#[derive(Debug, Default)]
pub struct AxumRegistrar {
    router: Router,
}

impl AxumRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finalize into the underlying router.
    pub fn into_router(self) -> Router {
        self.router
    }
}

impl RouteRegistrar for AxumRegistrar {
    fn register(&mut self, method: HttpMethod, path: &str, route: BoundRoute) {
        let BoundRoute { api_version, handler } = route;

        let endpoint_handler = move |request: Request<Body>| {
            let api_version = api_version.clone();
            let handler = handler.clone();
            async move {
                match handler {
                    Some(handler) => handler(api_version, request).await,
                    None => no_handler_configured(),
                }
            }
        };

        let method_router = match method {
            HttpMethod::Get => get(endpoint_handler),
            HttpMethod::Post => post(endpoint_handler),
            HttpMethod::Put => put(endpoint_handler),
            HttpMethod::Delete => delete(endpoint_handler),
        };

        // Router's builder API consumes self; same-path different-method
        // registrations merge into one MethodRouter.
        self.router = std::mem::take(&mut self.router).route(path, method_router);
    }
}

fn no_handler_configured() -> Response {
    (StatusCode::NOT_IMPLEMENTED, "no handler configured for this endpoint").into_response()
}

/// Registrar that records registrations instead of mounting them.
#[derive(Debug, Default)]
pub struct RecordingRegistrar {
    pub routes: Vec<RecordedRoute>,
}

/// One recorded registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRoute {
    pub method: HttpMethod,
    pub path: String,
    pub api_version: String,
    pub has_handler: bool,
}

impl RecordingRegistrar {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RouteRegistrar for RecordingRegistrar {
    fn register(&mut self, method: HttpMethod, path: &str, route: BoundRoute) {
        self.routes.push(RecordedRoute {
            method,
            path: path.to_string(),
            api_version: route.api_version,
            has_handler: route.handler.is_some(),
        });
    }
}
