use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::model::{SetExport, collect_rows, get_headers, to_record};
use crate::export::{ExportFormat, notify_export_success};
use crate::models::ProgramState;
use crate::ui::messages::warning;
use csv::Writer;
use std::fs;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write every logged set of `state` to `file`. Returns the row count.
    pub fn export(
        state: &ProgramState,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let rows = collect_rows(state);
        if rows.is_empty() {
            warning("No logged sets found. Nothing to export.");
            return Ok(0);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        match format {
            ExportFormat::Csv => write_csv(path, &rows)?,
            ExportFormat::Json => write_json(path, &rows)?,
        }
        log::info!("exported {} rows to {}", rows.len(), path.display());
        notify_export_success(&format.as_str().to_uppercase(), rows.len(), path);
        Ok(rows.len())
    }
}

fn write_csv(path: &Path, rows: &[SetExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;
    wtr.write_record(get_headers())
        .map_err(|e| AppError::Export(e.to_string()))?;
    for row in rows {
        wtr.write_record(to_record(row))
            .map_err(|e| AppError::Export(e.to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_json(path: &Path, rows: &[SetExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    fs::write(path, json)?;
    Ok(())
}
