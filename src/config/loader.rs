//! Configuration loading from disk.
//!
//! Skeletons only: a TOML file carries versions, paths, methods and flags,
//! never handlers. Implementations are wired in afterwards with
//! [`ApiConfig::attach_handler`].

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ApiConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load an API configuration skeleton from a TOML file.
pub fn load_skeleton(path: &Path) -> Result<ApiConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    from_toml_str(&content)
}

/// Parse an API configuration skeleton from a TOML string.
pub fn from_toml_str(content: &str) -> Result<ApiConfig, ConfigError> {
    let config: ApiConfig = toml::from_str(content)?;
    Ok(config)
}
