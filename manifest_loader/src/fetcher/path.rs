//! Local File Fetcher
//!
//! Reads manifest JSON from the local filesystem.

use crate::fetcher::{FetchError, FetchResult};
use std::io::ErrorKind;
use std::path::Path;

/* Local filesystem fetcher */
pub struct PathFetcher;

impl PathFetcher {
    pub fn new() -> Self {
        Self
    }

    pub fn fetch(&self, path: &Path) -> Result<FetchResult, FetchError> {
        let location = path.display().to_string();

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => FetchError::NotFound(location.clone()),
            _ => FetchError::Io {
                location: location.clone(),
                source: e,
            },
        })?;

        /* Canonical form is best effort; relative paths still identify the file */
        let canonical_location = path
            .canonicalize()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or(location);

        Ok(FetchResult {
            content,
            canonical_location,
            script_hash: None,
        })
    }
}

impl Default for PathFetcher {
    fn default() -> Self {
        Self::new()
    }
}
