//! The `extract` command: build model in, canonical document out.

use std::path::Path;

use crate::build_model;
use crate::context::ServiceContext;
use crate::structure::canonical;
use crate::walker;

/// Extracts the project-structure document from `model_path` and writes it
/// to `out_path`.
///
/// The document is rendered fully in memory before the single write, so
/// the output file is either complete and well-formed or absent.
///
/// # Errors
///
/// Returns an error string if the model cannot be read or parsed, the
/// configuration is invalid, rendering fails, or the write fails.
pub fn run_with_context(
    ctx: &ServiceContext,
    model_path: &Path,
    out_path: &Path,
) -> Result<(), String> {
    let text = ctx
        .fs
        .read_to_string(model_path)
        .map_err(|e| format!("Failed to read build model {}: {e}", model_path.display()))?;
    let model = build_model::from_yaml(&text)
        .map_err(|e| format!("Failed to parse build model {}: {e}", model_path.display()))?;

    let descriptor = walker::assemble(&model).map_err(|e| e.to_string())?;
    let document = canonical::render(&descriptor).map_err(|e| e.to_string())?;

    ctx.fs
        .write(out_path, &document)
        .map_err(|e| format!("Failed to write {}: {e}", out_path.display()))?;

    println!("Wrote {}", out_path.display());
    Ok(())
}
