//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic lint (serde handles syntactic)
//! - Flag declarations the binder will have to skip or shadow
//!
//! # Design Decisions
//! - Returns all findings, not just the first
//! - Pure function: ApiConfig → Vec<ValidationWarning>
//! - Findings are warnings, never rejections: resolution is permissive by
//!   design and degrades per endpoint instead of failing the whole config

use std::str::FromStr;

use thiserror::Error;

use crate::config::schema::ApiConfig;
use crate::routing::method::HttpMethod;

/// A non-fatal finding about a configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    #[error("version entry #{index} has an empty version id")]
    EmptyVersionId { index: usize },

    #[error("version id \"{version}\" is declared more than once; the later entry wins")]
    DuplicateVersionId { version: String },

    #[error("{version} {method} {path}: path does not start with '/'")]
    PathMissingSlash {
        version: String,
        method: String,
        path: String,
    },

    #[error("{version} {path}: method \"{method}\" is not routable and will be skipped")]
    UnroutableMethod {
        version: String,
        method: String,
        path: String,
    },

    #[error("{version}: {method} {path} is declared more than once; the later entry wins")]
    DuplicateEndpoint {
        version: String,
        method: String,
        path: String,
    },
}

/// Lint a configuration, returning every finding.
pub fn validate(config: &ApiConfig) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for (index, version) in config.versions.iter().enumerate() {
        if version.version.is_empty() {
            warnings.push(ValidationWarning::EmptyVersionId { index });
        }

        if config.versions[..index]
            .iter()
            .any(|v| v.version == version.version && !version.version.is_empty())
        {
            warnings.push(ValidationWarning::DuplicateVersionId {
                version: version.version.clone(),
            });
        }

        for (i, endpoint) in version.endpoints.iter().enumerate() {
            if !endpoint.path.starts_with('/') {
                warnings.push(ValidationWarning::PathMissingSlash {
                    version: version.version.clone(),
                    method: endpoint.method.clone(),
                    path: endpoint.path.clone(),
                });
            }

            if HttpMethod::from_str(&endpoint.method).is_err() {
                warnings.push(ValidationWarning::UnroutableMethod {
                    version: version.version.clone(),
                    method: endpoint.method.clone(),
                    path: endpoint.path.clone(),
                });
            }

            if version.endpoints[..i]
                .iter()
                .any(|e| e.path == endpoint.path && e.method == endpoint.method)
            {
                warnings.push(ValidationWarning::DuplicateEndpoint {
                    version: version.version.clone(),
                    method: endpoint.method.clone(),
                    path: endpoint.path.clone(),
                });
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{EndpointConfig, VersionConfig};

    #[test]
    fn clean_config_has_no_warnings() {
        let config = ApiConfig::new().version(
            VersionConfig::new("v1")
                .endpoint(EndpointConfig::get("/users"))
                .endpoint(EndpointConfig::post("/users")),
        );
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn reports_all_findings_not_just_first() {
        let config = ApiConfig::new()
            .version(
                VersionConfig::new("v1")
                    .endpoint(EndpointConfig::new("users", "GET"))
                    .endpoint(EndpointConfig::new("/users", "FETCH")),
            )
            .version(VersionConfig::new("v1"))
            .version(VersionConfig::new(""));

        let warnings = validate(&config);
        assert_eq!(warnings.len(), 4);
        assert!(warnings.contains(&ValidationWarning::PathMissingSlash {
            version: "v1".into(),
            method: "GET".into(),
            path: "users".into(),
        }));
        assert!(warnings.contains(&ValidationWarning::UnroutableMethod {
            version: "v1".into(),
            method: "FETCH".into(),
            path: "/users".into(),
        }));
        assert!(warnings.contains(&ValidationWarning::DuplicateVersionId { version: "v1".into() }));
        assert!(warnings.contains(&ValidationWarning::EmptyVersionId { index: 2 }));
    }

    #[test]
    fn reports_duplicate_endpoint_same_identity_only() {
        let config = ApiConfig::new().version(
            VersionConfig::new("v1")
                .endpoint(EndpointConfig::get("/a"))
                .endpoint(EndpointConfig::post("/a"))
                .endpoint(EndpointConfig::get("/a")),
        );

        let warnings = validate(&config);
        assert_eq!(
            warnings,
            vec![ValidationWarning::DuplicateEndpoint {
                version: "v1".into(),
                method: "GET".into(),
                path: "/a".into(),
            }]
        );
    }
}
