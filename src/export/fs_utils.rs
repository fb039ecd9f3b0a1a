// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Check that the export target can be created or replaced.
///
/// - missing file → Ok
/// - existing file with `force` → Ok
/// - existing file without `force` → error, nothing is touched
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    Err(AppError::Export(format!(
        "the file '{}' already exists (add `force` to overwrite)",
        path.display()
    )))
}
