use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RosterFile;
use crate::tabular::read_name_column;
use crate::ui::messages::{ask_confirmation, info, success};
use crate::utils::path::expand_tilde;

/// Bulk-load names from the first column of a CSV file. Every imported
/// person starts with the default position, offset and Present status.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = expand_tilde(file);
        let names = read_name_column(&path)?;

        let store = RosterFile::new(&cfg.roster);
        let mut roster = store.load()?;

        let inserted = roster.import_names(&names, |name| {
            ask_confirmation(&format!("'{}' is already on the roster. Add anyway?", name))
        });

        if inserted == 0 {
            info("No names imported.");
            return Ok(());
        }

        store.save(&roster)?;
        success(format!("Imported {} names.", inserted));
    }

    Ok(())
}
