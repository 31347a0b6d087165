use crate::db::pool::DbPool;
use crate::db::queries::list_tools;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ToolExport;
use crate::ui::messages::warning;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the tool table.
    ///
    /// - `file`: absolute path of the output file
    /// - `filter`: optional case-insensitive substring; a record is exported
    ///   iff at least one of its columns matches (same rule as the grid).
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        filter: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let mut records = list_tools(&pool.conn)?;
        if let Some(needle) = filter {
            records.retain(|r| r.matches(needle));
        }

        if records.is_empty() {
            warning("No tools found for the selected filter.");
            return Ok(());
        }

        let rows: Vec<ToolExport> = records.iter().map(ToolExport::from).collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}
