use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::offset::ExpectedOffset;
use crate::models::position::Position;
use crate::models::status::Status;
use crate::store::RosterFile;
use crate::ui::messages::{ask_confirmation, info, success};

/// Register a person on the roster.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        pos,
        offset,
        status,
    } = cmd
    {
        //
        // 1. Resolve position (flag, else configured default)
        //
        let pos_code = pos.clone().unwrap_or_else(|| cfg.default_position.clone());
        let position = Position::from_code(&pos_code)
            .ok_or_else(|| AppError::InvalidPosition(pos_code.clone()))?;

        //
        // 2. Resolve allowed arrival offset (flag, else configured default)
        //
        let offset_label = offset.clone().unwrap_or_else(|| cfg.default_offset.clone());
        let expected = ExpectedOffset::from_label(&offset_label)
            .ok_or_else(|| AppError::InvalidOffset(offset_label.clone()))?;

        //
        // 3. Resolve status (default Present)
        //
        let st = match status {
            Some(code) => {
                Status::from_code(code).ok_or_else(|| AppError::InvalidStatus(code.clone()))?
            }
            None => Status::Present,
        };

        //
        // 4. Load the roster and insert (duplicates need a confirmation)
        //
        let store = RosterFile::new(&cfg.roster);
        let mut roster = store.load()?;

        if roster.has_duplicate_name(name)
            && !ask_confirmation(&format!(
                "'{}' is already on the roster. Add anyway?",
                name.trim()
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        roster.add_person(name, position, expected, st)?;
        store.save(&roster)?;

        success(format!(
            "Added '{}' ({}, {}).",
            name.trim(),
            position.label(),
            expected.label()
        ));
    }

    Ok(())
}
