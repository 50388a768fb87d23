//! Raw manifest document shapes
//!
//! Only the fields binding generation needs are modelled; everything else in
//! the manifest (permissions, trusts, groups, extra) is ignored.

use crate::errors::{TypegenError, TypegenResult};
use manifest_types::ScriptHash;
use serde_derive::Deserialize;
use serde_json::Value;

/* Manifest text plus the hash implied by where it came from */
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestDocument {
    pub body: Value,
    pub source_hash: Option<ScriptHash>,
}

impl ManifestDocument {
    pub fn new(body: Value, source_hash: Option<ScriptHash>) -> Self {
        Self { body, source_hash }
    }

    /* Parse manifest JSON text */
    pub fn parse(text: &str, source_hash: Option<ScriptHash>) -> TypegenResult<Self> {
        let body = serde_json::from_str(text).map_err(|e| TypegenError::MalformedManifest {
            location: "manifest".to_string(),
            reason: format!("invalid JSON: {}", e),
        })?;
        Ok(Self::new(body, source_hash))
    }
}

/* Top level: methods and events stay untyped so each entry can be validated on its own */
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawManifest {
    pub name: String,
    #[serde(default, rename = "supportedstandards")]
    pub supported_standards: Vec<String>,
    pub abi: RawAbi,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawAbi {
    pub methods: Vec<Value>,
    #[serde(default)]
    pub events: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawMethod {
    pub name: String,
    pub parameters: Vec<RawParameter>,
    #[serde(rename = "returntype")]
    pub return_type: String,
    #[serde(default)]
    pub safe: bool,
    #[serde(default)]
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawEvent {
    pub name: String,
    #[serde(default)]
    pub parameters: Vec<RawParameter>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}
