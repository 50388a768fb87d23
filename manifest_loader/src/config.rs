//! Configuration file support
//!
//! An optional YAML file supplies defaults for the output directory and the
//! node endpoints. Command-line flags always take precedence.

use crate::fetcher::RpcFetcherConfig;
use serde_derive::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid config format
    #[error("Invalid config format: {0}")]
    InvalidFormat(#[from] serde_yml::Error),
}

/// Generator configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct TypegenConfig {
    /// Default output directory
    pub out: Option<PathBuf>,
    /// Node endpoints and timeouts
    pub rpc: RpcFetcherConfig,
}

impl TypegenConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(content)?)
    }
}
