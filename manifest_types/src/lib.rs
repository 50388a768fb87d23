//! Contract Manifest Type Definitions
//!
//! This crate contains the core data model for contract manifests: the closed
//! set of virtual-machine parameter types, script hashes, the normalized ABI
//! model and the options that drive binding generation. It provides pure data
//! structures without any file I/O or code generation logic.

pub mod hash;
pub mod model;
pub mod options;
pub mod types;

// Re-export commonly used types at the crate root
pub use hash::{ScriptHash, ScriptHashError, SCRIPT_HASH_LEN};
pub use model::{AbiModel, Event, Method, Parameter};
pub use options::{GenerationOptions, DEFAULT_OUTPUT_DIR};
pub use types::{AbiType, TypeParseError, MAX_TYPE_DEPTH};
