use crate::codegen::EmittedModule;
use manifest_loader::{TypegenError, TypegenResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/* Write emitted modules into `output_dir`, creating it when missing */
pub fn write_modules(output_dir: &Path, modules: &[EmittedModule]) -> TypegenResult<Vec<PathBuf>> {
  fs::create_dir_all(output_dir).map_err(|source| TypegenError::Io {
    path: output_dir.to_path_buf(),
    source,
  })?;

  let mut written = Vec::with_capacity(modules.len());
  for module in modules {
    let path = output_dir.join(&module.file_name);
    fs::write(&path, &module.source_text).map_err(|source| TypegenError::Io {
      path: path.clone(),
      source,
    })?;
    info!("wrote {}", path.display());
    written.push(path);
  }

  Ok(written)
}
