//! Version resolution: inheritance, overrides and dedup.
//!
//! # Responsibilities
//! - Walk versions in declaration order
//! - Skip inactive versions entirely (no table entry, no inheritance)
//! - Copy forward the previous active version's non-deprecated endpoints
//! - Apply own declarations with push-or-replace on `(path, method)`
//!
//! # Design Decisions
//! - Pure function of the configuration; resolving twice yields equal tables
//! - Inherited entries are value copies rebound to the inheriting version,
//!   never aliases into the source list
//! - An own declaration that is inactive is never processed, so an inherited
//!   copy at the same `(path, method)` silently survives for that version

use crate::config::schema::ApiConfig;
use crate::routing::endpoint::{Endpoint, ResolvedTable, ResolvedVersion};

/// Build the resolved version → endpoint-list table.
pub fn resolve(config: &ApiConfig) -> ResolvedTable {
    let mut table = ResolvedTable::default();
    let mut previous: Option<String> = None;

    for version_config in &config.versions {
        if !version_config.active {
            tracing::debug!(version = %version_config.version, "skipping inactive version");
            continue;
        }

        let mut endpoints = Vec::new();

        // Inheritance: copy the previous active version's non-deprecated
        // endpoints, rebound to this version, before own declarations are
        // applied on top.
        if let Some(source) = previous.as_deref().and_then(|prev| table.get(prev)) {
            for endpoint in source.iter().filter(|e| !e.config.deprecated) {
                let mut copy = endpoint.clone();
                copy.api_version = version_config.version.clone();
                endpoints.push(copy);
            }
        }

        let inherited = endpoints.len();

        for declaration in &version_config.endpoints {
            if !declaration.active {
                continue;
            }
            let endpoint = Endpoint::new(version_config.version.clone(), declaration.clone());
            push_or_replace(&mut endpoints, endpoint);
        }

        tracing::debug!(
            version = %version_config.version,
            inherited,
            resolved = endpoints.len(),
            "resolved version"
        );

        // A duplicate version id replaces its earlier entry in place.
        match table.entry_mut(&version_config.version) {
            Some(entry) => entry.endpoints = endpoints,
            None => table.push(ResolvedVersion {
                version: version_config.version.clone(),
                endpoints,
            }),
        }

        previous = Some(version_config.version.clone());
    }

    table
}

/// Dedup rule keyed on `(path, method)`: replace in place (preserving list
/// position) when an entry with the same identity exists, else append.
fn push_or_replace(endpoints: &mut Vec<Endpoint>, endpoint: Endpoint) {
    match endpoints.iter_mut().find(|e| e.same_identity(&endpoint)) {
        Some(existing) => *existing = endpoint,
        None => endpoints.push(endpoint),
    }
}
