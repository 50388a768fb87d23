pub mod ts_gen;

use manifest_loader::{TypegenError, TypegenResult};
use manifest_types::{AbiModel, GenerationOptions};
use tracing::debug;

/* One generated source file */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedModule {
  pub file_name: String,
  pub source_text: String,
}

/* Generate the client module, plus the impl module when requested */
pub fn generate(model: &AbiModel, options: &GenerationOptions) -> TypegenResult<Vec<EmittedModule>> {
  if options.embed_hash && model.script_hash.is_none() {
    return Err(TypegenError::MissingHash);
  }

  let plan = ts_gen::plan::build_plan(model, options)?;
  debug!(
    "binding plan for '{}': {} method(s), {} event(s)",
    plan.class_name,
    plan.methods.len(),
    plan.events.len()
  );

  let mut modules = vec![EmittedModule {
    file_name: format!("{}.ts", plan.class_name),
    source_text: ts_gen::client::emit_client_module(&plan),
  }];

  if options.generate_impl {
    modules.push(EmittedModule {
      file_name: format!("{}.ts", plan.impl_class_name()),
      source_text: ts_gen::impl_class::emit_impl_module(&plan),
    });
  }

  Ok(modules)
}
