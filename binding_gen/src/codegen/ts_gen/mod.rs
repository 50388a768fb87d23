pub mod client;
pub mod helpers;
pub mod impl_class;
pub mod names;
pub mod plan;
pub mod prelude;
pub mod types;

/* Re-export main public functions */
pub use client::emit_client_module;
pub use impl_class::emit_impl_module;
pub use names::{IdentifierKind, resolve_identifier};
pub use types::{DecodeStrategy, MappedType, TypeMapError, map_type};
