use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::RosterFile;
use crate::tabular::{ExportFormat, ExportLogic};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        hours,
        format,
        file,
        force,
    } = cmd
    {
        let fmt = match format {
            Some(f) => f.clone(),
            None => ExportFormat::from_name(&cfg.export_format).ok_or_else(|| {
                AppError::Config(format!(
                    "unknown export_format '{}' in configuration",
                    cfg.export_format
                ))
            })?,
        };

        let store = RosterFile::new(&cfg.roster);
        let roster = store.load()?;

        ExportLogic::export(&roster, *hours, fmt, file.as_deref(), *force)?;
    }

    Ok(())
}
