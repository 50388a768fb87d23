//! Manifest Fetcher Infrastructure
//!
//! Obtains manifest text either from a local file or from a node's
//! `getcontractstate` JSON-RPC method. Fetchers only move bytes; validating
//! the manifest is the loader's job.

pub mod path;
pub mod rpc;

use manifest_types::ScriptHash;
use serde_derive::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/* ============================================================================
   Manifest Source
   ============================================================================ */

/* Where the manifest comes from */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    /* Local manifest JSON file */
    File { path: PathBuf },
    /* Node endpoint URL or configured network alias, queried for `hash` */
    Node { url: String, hash: ScriptHash },
}

/* ============================================================================
   Fetcher Configuration
   ============================================================================ */

/* Node fetcher configuration */
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RpcFetcherConfig {
    /* Map of network alias to RPC endpoint URL */
    pub endpoints: BTreeMap<String, String>,
    /* Timeout for RPC calls in seconds */
    pub timeout_seconds: u64,
}

impl Default for RpcFetcherConfig {
    fn default() -> Self {
        let mut endpoints = BTreeMap::new();
        endpoints.insert("mainnet".to_string(), "https://mainnet1.neo.coz.io:443".to_string());
        endpoints.insert("testnet".to_string(), "https://testnet1.neo.coz.io:443".to_string());

        Self {
            endpoints,
            timeout_seconds: 30,
        }
    }
}

impl RpcFetcherConfig {
    /* Resolve a URL or alias to an endpoint URL */
    pub fn resolve_endpoint(&self, url_or_alias: &str) -> Result<String, FetchError> {
        if url_or_alias.starts_with("http://") || url_or_alias.starts_with("https://") {
            return Ok(url_or_alias.to_string());
        }
        self.endpoints
            .get(url_or_alias)
            .cloned()
            .ok_or_else(|| FetchError::UnknownNetwork(url_or_alias.to_string()))
    }
}

/* ============================================================================
   Fetch Result
   ============================================================================ */

/* Result of successfully fetching a manifest */
#[derive(Debug, Clone)]
pub struct FetchResult {
    /* Manifest JSON text */
    pub content: String,
    /* File path or endpoint the manifest was read from */
    pub canonical_location: String,
    /* Hash the node was queried with; None for files */
    pub script_hash: Option<ScriptHash>,
}

/* ============================================================================
   Fetch Error
   ============================================================================ */

/* Errors that can occur during fetching */
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("manifest not found: {0}")]
    NotFound(String),

    #[error("failed to read '{location}': {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("invalid node response: {0}")]
    Parse(String),

    #[error("unknown network '{0}'; pass a URL or configure the alias under rpc.endpoints")]
    UnknownNetwork(String),
}

/* ============================================================================
   Composite Fetcher
   ============================================================================ */

/* Fetcher that delegates to the backend matching the source */
pub struct CompositeFetcher {
    path: path::PathFetcher,
    rpc: rpc::RpcFetcher,
}

impl CompositeFetcher {
    pub fn new(config: &RpcFetcherConfig) -> Result<Self, FetchError> {
        Ok(Self {
            path: path::PathFetcher::new(),
            rpc: rpc::RpcFetcher::new(config)?,
        })
    }

    /* Fetch manifest text from a source */
    pub async fn fetch(&self, source: &ManifestSource) -> Result<FetchResult, FetchError> {
        debug!("fetching manifest from {:?}", source);
        match source {
            ManifestSource::File { path } => self.path.fetch(path),
            ManifestSource::Node { url, hash } => self.rpc.fetch(url, hash).await,
        }
    }
}
