// src/tabular/logic.rs

use crate::core::roster::Roster;
use crate::core::stats::arrival_percent_within;
use crate::errors::{AppError, AppResult};
use crate::tabular::ExportFormat;
use crate::tabular::csv_io::export_csv;
use crate::tabular::model::roster_to_rows;
use crate::tabular::xlsx::export_xlsx;
use crate::ui::messages::{info, warning};
use crate::utils::formatting::{hours_label, percent_label};
use crate::utils::path::expand_tilde;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// High-level logic for the `export` command.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the roster snapshot.
    ///
    /// - `hours`: arrival horizon for the summary percent, > 0
    /// - `file`: output path; defaults to `export_<hours>h.<ext>` in the
    ///   current directory
    /// - `force`: overwrite an existing file without asking
    ///
    /// Refused while the shift timer is unset: arrival and lateness
    /// columns would carry no meaning.
    pub fn export(
        roster: &Roster,
        hours: f64,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<PathBuf> {
        if !(hours > 0.0) {
            return Err(AppError::InvalidHorizon(hours.to_string()));
        }
        if roster.shift_start().is_none() {
            return Err(AppError::ShiftNotStarted);
        }

        let label = hours_label(hours);
        let path = match file {
            Some(f) => expand_tilde(f),
            None => PathBuf::from(format!("export_{}.{}", label, format.as_str())),
        };

        ensure_writable(&path, force)?;

        let rows = roster_to_rows(roster);
        let percent = arrival_percent_within(roster, (hours * 60.0).round() as i64);
        let summary_label = format!("Arrived within {label}");
        let summary_value = percent_label(percent);

        match format {
            ExportFormat::Csv => export_csv(&rows, &summary_label, &summary_value, &path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, &summary_label, &summary_value, &path)?,
        }

        Ok(path)
    }
}

/// Existing files are only overwritten after an explicit go-ahead,
/// either `force` or a confirmation on stdin.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(AppError::from)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "cancelled: existing file not overwritten".to_string(),
        ))
    }
}
