use crate::cli::commands::resolve_selector;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RosterFile;
use crate::ui::messages::{ask_confirmation, info, success};

/// Remove people from the roster. A single selector deletes straight
/// away; bulk removals and --all ask first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { selectors, all } = cmd {
        let store = RosterFile::new(&cfg.roster);
        let mut roster = store.load()?;

        //
        // Full wipe
        //
        if *all {
            if roster.is_empty() {
                info("Roster is already empty.");
                return Ok(());
            }

            let prompt = format!(
                "Remove all {} people from the roster? This action is irreversible.",
                roster.len()
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = roster.len();
            roster.clear_people();
            store.save(&roster)?;
            success(format!("Removed {} people.", removed));
            return Ok(());
        }

        //
        // Resolve every selector before deleting anything
        //
        let mut ids = Vec::new();
        for sel in selectors {
            let id = resolve_selector(&roster, sel)?;
            if !ids.contains(&id) {
                ids.push(id);
            }
        }

        if ids.len() == 1 {
            let removed = roster.remove(ids[0])?;
            store.save(&roster)?;
            success(format!("Removed '{}'.", removed.full_name));
            return Ok(());
        }

        let prompt = format!(
            "Remove {} people from the roster? This action is irreversible.",
            ids.len()
        );
        if !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let n = roster.remove_many(&ids)?;
        store.save(&roster)?;
        success(format!("Removed {} people.", n));
    }

    Ok(())
}
