use crate::cli::commands::resolve_selector;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::offset::ExpectedOffset;
use crate::models::position::Position;
use crate::models::status::Status;
use crate::store::RosterFile;
use crate::ui::messages::{ask_confirmation, info, success};

/// Edit one or more fields of a person already on the roster.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        selector,
        name,
        pos,
        offset,
        status,
    } = cmd
    {
        if name.is_none() && pos.is_none() && offset.is_none() && status.is_none() {
            return Err(AppError::NothingToDo);
        }

        //
        // 1. Parse the typed values up front, before touching the file
        //
        let position = match pos {
            Some(code) => Some(
                Position::from_code(code).ok_or_else(|| AppError::InvalidPosition(code.clone()))?,
            ),
            None => None,
        };
        let expected = match offset {
            Some(label) => Some(
                ExpectedOffset::from_label(label)
                    .ok_or_else(|| AppError::InvalidOffset(label.clone()))?,
            ),
            None => None,
        };
        let st = match status {
            Some(code) => {
                Some(Status::from_code(code).ok_or_else(|| AppError::InvalidStatus(code.clone()))?)
            }
            None => None,
        };

        //
        // 2. Load roster and resolve the target
        //
        let store = RosterFile::new(&cfg.roster);
        let mut roster = store.load()?;
        let id = resolve_selector(&roster, selector)?;

        //
        // 3. Apply each requested change
        //
        if let Some(new_name) = name {
            let current = roster
                .get(id)
                .map(|p| p.full_name.clone())
                .unwrap_or_default();
            let same = current.trim().to_lowercase() == new_name.trim().to_lowercase();
            if !same
                && roster.has_duplicate_name(new_name)
                && !ask_confirmation(&format!(
                    "'{}' is already on the roster. Rename anyway?",
                    new_name.trim()
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }
            roster.rename(id, new_name)?;
        }
        if let Some(p) = position {
            roster.set_position(id, p)?;
        }
        if let Some(e) = expected {
            roster.set_expected(id, e)?;
        }
        if let Some(s) = st {
            roster.set_status(id, s)?;
        }

        let shown = roster
            .get(id)
            .map(|p| p.full_name.clone())
            .unwrap_or_default();
        store.save(&roster)?;
        success(format!("Updated '{}'.", shown));
    }

    Ok(())
}
