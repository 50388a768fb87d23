//! Contract Binding Generation
//!
//! This crate turns a loaded `AbiModel` into TypeScript binding modules: a
//! typed client class and, optionally, an impl class routed through one
//! generic invocation method. It also provides the writer that places the
//! emitted modules on disk.

pub mod codegen;
pub mod writer;

// Re-export commonly used types at the crate root
pub use codegen::{EmittedModule, generate};
pub use writer::write_modules;
