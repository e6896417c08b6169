pub mod add;
pub mod arrive;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod reset;
pub mod start;

use crate::core::roster::Roster;
use crate::errors::{AppError, AppResult};
use crate::models::person::PersonId;

/// Resolve a CLI selector against the current roster ordering.
/// A bare number is the row number shown by `list`; anything else is a
/// case-insensitive exact full-name match.
pub(crate) fn resolve_selector(roster: &Roster, selector: &str) -> AppResult<PersonId> {
    if let Ok(seq) = selector.trim().parse::<usize>() {
        return roster
            .id_at_seq(seq)
            .ok_or_else(|| AppError::PersonNotFound(selector.to_string()));
    }

    let matches = roster.find_by_name(selector);
    match matches.len() {
        0 => Err(AppError::PersonNotFound(selector.to_string())),
        1 => Ok(matches[0]),
        _ => Err(AppError::AmbiguousName(selector.to_string())),
    }
}
