//! Node RPC Fetcher
//!
//! Fetches a deployed contract's manifest via the `getcontractstate`
//! JSON-RPC method.

use crate::fetcher::{FetchError, FetchResult, RpcFetcherConfig};
use manifest_types::ScriptHash;
use reqwest::Client;
use serde_derive::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;

/// JSON-RPC request structure
#[derive(Debug, Serialize)]
struct JsonRpcRequest {
    jsonrpc: &'static str,
    id: u64,
    method: &'static str,
    params: Value,
}

/// JSON-RPC response structure
#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    result: Option<ContractState>,
    error: Option<JsonRpcError>,
}

/// JSON-RPC error structure
#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

/* Subset of the contract state the node returns */
#[derive(Debug, Deserialize)]
struct ContractState {
    manifest: Option<Value>,
}

/* Node RPC fetcher */
pub struct RpcFetcher {
    client: Client,
    config: RpcFetcherConfig,
}

impl RpcFetcher {
    pub fn new(config: &RpcFetcherConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("n3-typegen/0.1")
            .build()
            .map_err(|e| FetchError::Http {
                status: 0,
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /* Query `url_or_alias` for the manifest of the contract at `hash` */
    pub async fn fetch(&self, url_or_alias: &str, hash: &ScriptHash) -> Result<FetchResult, FetchError> {
        let endpoint = self.config.resolve_endpoint(url_or_alias)?;

        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method: "getcontractstate",
            params: json!([hash.to_string()]),
        };
        tracing::trace!("request: {:?}", request);

        let response = self
            .client
            .post(endpoint.as_str())
            .json(&request)
            .send()
            .await
            .map_err(|e| FetchError::Http {
                status: 0,
                message: format!("Request to {} failed: {}", endpoint, e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                message: format!("HTTP {} for {}", status, endpoint),
            });
        }

        let body = response.text().await.map_err(|e| FetchError::Http {
            status: 0,
            message: format!("Failed to read response body: {}", e),
        })?;
        tracing::trace!("response: {:?}", body);

        let rpc_response: JsonRpcResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        if let Some(error) = rpc_response.error {
            return Err(FetchError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        let manifest = rpc_response
            .result
            .and_then(|state| state.manifest)
            .ok_or_else(|| FetchError::Parse("response carries no contract manifest".to_string()))?;

        /* Some nodes return the manifest as an embedded JSON string */
        let content = match manifest {
            Value::String(text) => text,
            other => other.to_string(),
        };

        Ok(FetchResult {
            content,
            canonical_location: format!("{}#{}", endpoint, hash),
            script_hash: Some(*hash),
        })
    }
}
