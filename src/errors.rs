//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Roster data file
    // ---------------------------
    #[error("Corrupt roster file: {0}")]
    CorruptSnapshot(String),

    #[error("Failed to save roster file: {0}")]
    SnapshotSave(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid position code: {0}")]
    InvalidPosition(String),

    #[error("Invalid status code: {0}")]
    InvalidStatus(String),

    #[error("Invalid arrival offset: {0}")]
    InvalidOffset(String),

    #[error("Invalid export horizon: {0}")]
    InvalidHorizon(String),

    // ---------------------------
    // Roster logic errors
    // ---------------------------
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("No person matches '{0}'")]
    PersonNotFound(String),

    #[error("Ambiguous name '{0}': use the row number instead")]
    AmbiguousName(String),

    #[error("Nothing to do: specify at least one of --name, --pos, --offset or --status")]
    NothingToDo,

    #[error("Shift has not been started yet")]
    ShiftNotStarted,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Import / export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Import error: {0}")]
    Import(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
