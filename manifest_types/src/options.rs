use crate::hash::ScriptHash;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "src/contracts";

/* Options for one generation run; built once from CLI/config input */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOptions {
    /* Directory the emitted modules are written to */
    pub output_dir: PathBuf,
    /* Contract class name replacing the manifest name */
    pub name_override: Option<String>,
    /* Script hash replacing whatever the manifest source implies */
    pub hash_override: Option<ScriptHash>,
    /* Embed the script hash as a class constant */
    pub embed_hash: bool,
    /* Also emit the generic-invoker impl class */
    pub generate_impl: bool,
    /* Map unknown type names to Any instead of failing */
    pub allow_unknown_types: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            name_override: None,
            hash_override: None,
            embed_hash: false,
            generate_impl: false,
            allow_unknown_types: false,
        }
    }
}
