// src/tabular/csv_io.rs

use crate::errors::{AppError, AppResult};
use crate::tabular::model::{ExportRow, get_headers};
use crate::tabular::notify_export_success;
use crate::ui::messages::info;
use std::path::Path;

/// Export CSV: data rows (header included thanks to serde), one blank
/// row, then the summary row with the horizon percent in the last
/// column.
pub(crate) fn export_csv(
    rows: &[ExportRow],
    summary_label: &str,
    summary_value: &str,
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for item in rows {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }
    if rows.is_empty() {
        // serde only emits the header with the first row
        wtr.write_record(get_headers())
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.write_record(["", "", "", "", "", ""])
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    wtr.write_record([summary_label, "", "", "", "", summary_value])
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}

/// First column of a CSV file, one name per row. A leading header row
/// ("name" / "full_name") is skipped; other columns are ignored.
pub(crate) fn read_name_column(path: &Path) -> AppResult<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| AppError::Import(format!("cannot open '{}': {e}", path.display())))?;

    let mut names = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| AppError::Import(e.to_string()))?;
        names.push(record.get(0).unwrap_or("").to_string());
    }

    if let Some(first) = names.first() {
        let head = first.trim().to_lowercase();
        if head == "name" || head == "full_name" {
            names.remove(0);
        }
    }

    Ok(names)
}
