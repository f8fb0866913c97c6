//! Resolved routing entities.
//!
//! # Responsibilities
//! - Represent one endpoint bound to one version (`Endpoint`)
//! - Hold the version → endpoint-list mapping (`ResolvedTable`)
//!
//! # Design Decisions
//! - Endpoint identity for dedup/override is `(path, method)`; the version
//!   is the table partition key, not part of the identity
//! - The table is built once by the resolver, immutable afterwards
//! - `Endpoint::clone` yields an independent value copy, so inherited
//!   entries can diverge from their source without aliasing

use crate::config::schema::EndpointConfig;

/// One endpoint declaration resolved against one API version.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    /// Version this entry is bound under (the route prefix).
    pub api_version: String,

    /// Path relative to the version prefix.
    pub path: String,

    /// The declaration this entry was built from, including flags and
    /// handler. An inherited copy keeps the source's flags and handler but
    /// is rebound to the inheriting version.
    pub config: EndpointConfig,
}

impl Endpoint {
    pub fn new(api_version: impl Into<String>, config: EndpointConfig) -> Self {
        Self {
            api_version: api_version.into(),
            path: config.path.clone(),
            config,
        }
    }

    /// Full route path: `/{api_version}{path}`.
    pub fn route_path(&self) -> String {
        format!("/{}{}", self.api_version, self.path)
    }

    /// Identity test for push-or-replace: same path, same method string.
    pub fn same_identity(&self, other: &Endpoint) -> bool {
        self.path == other.path && self.config.method == other.config.method
    }
}

/// One version's resolved, deduplicated endpoint list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedVersion {
    pub version: String,
    pub endpoints: Vec<Endpoint>,
}

/// The final version → endpoint-list mapping.
///
/// Iteration order is the order active versions appeared in the source
/// configuration. Within one resolved version no two endpoints share the
/// same `(path, method)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedTable {
    versions: Vec<ResolvedVersion>,
}

impl ResolvedTable {
    /// Number of active versions in the table.
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Look up one version's resolved endpoint list.
    pub fn get(&self, version: &str) -> Option<&[Endpoint]> {
        self.versions
            .iter()
            .find(|v| v.version == version)
            .map(|v| v.endpoints.as_slice())
    }

    /// Versions in resolution order.
    pub fn versions(&self) -> &[ResolvedVersion] {
        &self.versions
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedVersion> {
        self.versions.iter()
    }

    pub(crate) fn entry_mut(&mut self, version: &str) -> Option<&mut ResolvedVersion> {
        self.versions.iter_mut().find(|v| v.version == version)
    }

    pub(crate) fn push(&mut self, version: ResolvedVersion) {
        self.versions.push(version);
    }
}
