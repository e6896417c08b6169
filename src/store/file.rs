use crate::core::roster::Roster;
use crate::errors::{AppError, AppResult};
use crate::store::snapshot::RosterSnapshot;
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk access to the roster snapshot.
///
/// Every save writes the full document to a sibling temp file and renames
/// it into place, so a failed write can never leave a half-written
/// roster behind.
pub struct RosterFile {
    path: PathBuf,
}

impl RosterFile {
    pub fn new(path: &str) -> Self {
        Self {
            path: expand_tilde(path),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing file is a fresh roster (first run). A file that exists
    /// but cannot be read or parsed is corruption: the load fails loudly
    /// and the file is left exactly as found.
    pub fn load(&self) -> AppResult<Roster> {
        if !self.path.exists() {
            return Ok(Roster::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let snapshot: RosterSnapshot = serde_json::from_str(&content)
            .map_err(|e| AppError::CorruptSnapshot(format!("{}: {}", self.path.display(), e)))?;

        snapshot
            .into_roster()
            .map_err(|e| AppError::CorruptSnapshot(format!("{}: {}", self.path.display(), e)))
    }

    pub fn save(&self, roster: &Roster) -> AppResult<()> {
        let snapshot = RosterSnapshot::from_roster(roster);
        let json = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| AppError::SnapshotSave(e.to_string()))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json.as_bytes())?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
