//! Contract Manifest Loading
//!
//! This crate provides functionality for obtaining a contract manifest (from
//! a local file or from a node over JSON-RPC), validating its structure and
//! normalizing it into the `AbiModel` consumed by binding generation.

pub mod config;
pub mod document;
pub mod errors;
pub mod fetcher;
pub mod loader;

// Re-export commonly used types at the crate root
pub use config::{ConfigError, TypegenConfig};
pub use document::ManifestDocument;
pub use errors::{TypePath, TypegenError, TypegenResult};
pub use fetcher::{
    CompositeFetcher, FetchError, FetchResult, ManifestSource, RpcFetcherConfig,
};
pub use loader::load_model;

// Re-export manifest_types for convenience
pub use manifest_types;
