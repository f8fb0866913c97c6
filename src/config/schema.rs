//! Configuration schema definitions.
//!
//! This module defines the declarative shape of a versioned API: an ordered
//! list of versions, each carrying an ordered list of endpoint declarations.
//! All types derive Serde traits so flag-and-method skeletons can be loaded
//! from config files; handler callbacks are attached programmatically and
//! skipped by Serde.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use futures_util::future::BoxFuture;
use serde::{Deserialize, Serialize};

/// Opaque endpoint callback: receives the API version the route was bound
/// under and the incoming request, produces the response.
pub type EndpointHandler =
    Arc<dyn Fn(String, Request<Body>) -> BoxFuture<'static, Response> + Send + Sync>;

/// Wrap a plain async closure as an [`EndpointHandler`].
pub fn handler_fn<F, Fut>(f: F) -> EndpointHandler
where
    F: Fn(String, Request<Body>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Response> + Send + 'static,
{
    Arc::new(move |api_version, request| Box::pin(f(api_version, request)))
}

/// Root configuration: the ordered set of API versions.
///
/// Declaration order is significant. The resolver walks versions in this
/// order, and each active version inherits from the active version declared
/// before it.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Version definitions, in precedence order.
    pub versions: Vec<VersionConfig>,
}

impl ApiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a version definition (builder form).
    pub fn version(mut self, version: VersionConfig) -> Self {
        self.versions.push(version);
        self
    }

    /// Append a version definition in place.
    pub fn push_version(&mut self, version: VersionConfig) {
        self.versions.push(version);
    }

    /// Attach a handler to an already-declared endpoint, matched by version
    /// id, path and method string. Returns false when no declaration
    /// matches. Used to wire implementations into a skeleton loaded from a
    /// config file.
    pub fn attach_handler(
        &mut self,
        version: &str,
        path: &str,
        method: &str,
        handler: EndpointHandler,
    ) -> bool {
        for version_config in self.versions.iter_mut().filter(|v| v.version == version) {
            if let Some(endpoint) = version_config
                .endpoints
                .iter_mut()
                .find(|e| e.path == path && e.method == method)
            {
                endpoint.handler = Some(handler);
                return true;
            }
        }
        false
    }
}

/// One API version: an id, an activity flag and its endpoint declarations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VersionConfig {
    /// Version identifier, used as the route prefix (e.g. "v1").
    pub version: String,

    /// Inactive versions are skipped entirely: they produce no routes and
    /// never take part in inheritance.
    pub active: bool,

    /// Endpoint declarations, in declaration order.
    pub endpoints: Vec<EndpointConfig>,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            version: String::new(),
            active: true,
            endpoints: Vec::new(),
        }
    }
}

impl VersionConfig {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Self::default()
        }
    }

    /// Mark this version inactive (builder form).
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    /// Append an endpoint declaration (builder form).
    pub fn endpoint(mut self, endpoint: EndpointConfig) -> Self {
        self.endpoints.push(endpoint);
        self
    }
}

/// One endpoint declaration inside a version.
///
/// The method is kept as a raw string: the config surface is permissive and
/// the closed-enum check happens at bind time, so one bad method never
/// aborts resolution of its siblings.
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Endpoint path relative to the version prefix (e.g. "/users").
    pub path: String,

    /// Inactive endpoints are dropped even from the version declaring them.
    pub active: bool,

    /// Deprecated endpoints still serve in their own version but are not
    /// inherited by the next one.
    pub deprecated: bool,

    /// HTTP method string, matched exactly ("GET", "POST", "PUT", "DELETE").
    pub method: String,

    /// Implementation callback. `None` means declared but unimplemented;
    /// the binder mounts an inert 501 responder in that case.
    #[serde(skip)]
    pub handler: Option<EndpointHandler>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            active: true,
            deprecated: false,
            method: String::new(),
            handler: None,
        }
    }
}

impl EndpointConfig {
    pub fn new(path: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
            ..Self::default()
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(path, "GET")
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(path, "POST")
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(path, "PUT")
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(path, "DELETE")
    }

    /// Set the implementation callback (builder form).
    pub fn handler(mut self, handler: EndpointHandler) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Mark this endpoint deprecated (builder form).
    pub fn deprecated(mut self) -> Self {
        self.deprecated = true;
        self
    }

    /// Mark this endpoint inactive (builder form).
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

impl fmt::Debug for EndpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointConfig")
            .field("path", &self.path)
            .field("active", &self.active)
            .field("deprecated", &self.deprecated)
            .field("method", &self.method)
            .field("handler", &self.handler.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

// Handlers compare by identity: two configs are equal when their flags match
// and they share the same callback (or both lack one).
impl PartialEq for EndpointConfig {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
            && self.active == other.active
            && self.deprecated == other.deprecated
            && self.method == other.method
            && match (&self.handler, &other.handler) {
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}
