use crate::fetcher::FetchError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across loading and generation.
pub type TypegenResult<T> = Result<T, TypegenError>;

/// Location of a type inside the manifest, used to attribute type errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypePath {
    Parameter { method: String, index: usize, name: String },
    ReturnValue { method: String },
    EventParameter { event: String, index: usize, name: String },
}

impl fmt::Display for TypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypePath::Parameter { method, index, name } => {
                write!(f, "method '{}' parameter #{} ('{}')", method, index, name)
            }
            TypePath::ReturnValue { method } => write!(f, "method '{}' return value", method),
            TypePath::EventParameter { event, index, name } => {
                write!(f, "event '{}' parameter #{} ('{}')", event, index, name)
            }
        }
    }
}

/// Errors that end a generation run. None of them are retried.
#[derive(Debug, Error)]
pub enum TypegenError {
    /// The manifest document violates the expected shape.
    #[error("malformed manifest at {location}: {reason}")]
    MalformedManifest { location: String, reason: String },

    /// A type has no mapping into the target language.
    #[error("unsupported type '{type_name}' in {path}: {reason}")]
    UnsupportedType {
        path: TypePath,
        type_name: String,
        reason: String,
    },

    /// A type descriptor is broken or nested beyond the depth bound.
    #[error("malformed type '{raw}' in {path}: {reason}")]
    MalformedType {
        path: TypePath,
        raw: String,
        reason: String,
    },

    /// A user-supplied name is not a legal identifier.
    #[error("invalid identifier '{raw}'")]
    InvalidIdentifier { raw: String },

    /// Hash embedding was requested but no script hash could be resolved.
    #[error("hash embedding requested but no script hash is available; pass --hash or fetch the manifest from a node")]
    MissingHash,

    /// A user-supplied script hash could not be parsed.
    #[error("invalid script hash '{raw}': {reason}")]
    InvalidHash { raw: String, reason: String },

    /// The manifest source failed; surfaced as reported by the fetcher.
    #[error(transparent)]
    FetchFailure(#[from] FetchError),

    /// Writing an emitted module failed.
    #[error("failed to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
