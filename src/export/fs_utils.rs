// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{confirm, info, warning};
use std::path::Path;

/// Check that the export target can be written.
///
/// An existing file is only replaced with `force` or after the operator
/// agrees to overwrite it.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    if !confirm("Overwrite?")? {
        return Err(AppError::Export(
            "export cancelled: existing file not overwritten".to_string(),
        ));
    }

    info("Existing file will be overwritten.");
    Ok(())
}
