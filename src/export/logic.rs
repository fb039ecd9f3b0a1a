use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::entries_to_rows;
use crate::models::FitnessEntry;
use std::path::Path;
use tracing::info;

pub struct ExportLogic;

impl ExportLogic {
    /// Write the session's entries to `path`, in insertion order.
    pub fn export(
        entries: &[FitnessEntry],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        let rows = entries_to_rows(entries);
        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        info!(
            format = format.as_str(),
            rows = rows.len(),
            path = %path.display(),
            "entries exported"
        );
        Ok(())
    }
}
