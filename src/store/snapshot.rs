//! Durable form of the roster: one JSON document, rewritten whole on
//! every mutation. Timestamps are RFC 3339, enums their labels.

use crate::core::roster::Roster;
use crate::errors::AppResult;
use crate::models::offset::ExpectedOffset;
use crate::models::position::Position;
use crate::models::status::Status;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct RosterSnapshot {
    pub shift_start: Option<DateTime<Local>>,
    pub people: Vec<PersonRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PersonRecord {
    pub full_name: String,
    pub position: Position,
    pub expected: ExpectedOffset,
    pub status: Status,
    pub arrival: Option<DateTime<Local>>,
}

impl RosterSnapshot {
    pub fn from_roster(roster: &Roster) -> Self {
        RosterSnapshot {
            shift_start: roster.shift_start(),
            people: roster
                .people()
                .iter()
                .map(|p| PersonRecord {
                    full_name: p.full_name.clone(),
                    position: p.position,
                    expected: p.expected,
                    status: p.status,
                    arrival: p.arrival,
                })
                .collect(),
        }
    }

    /// Rebuild the live roster. Handles are assigned fresh; everything
    /// else round-trips exactly as stored.
    pub fn into_roster(self) -> AppResult<Roster> {
        let mut roster = Roster::new();

        if let Some(start) = self.shift_start {
            roster.start_shift(start);
        }

        for rec in self.people {
            let id = roster.add_person(&rec.full_name, rec.position, rec.expected, rec.status)?;
            if let Some(at) = rec.arrival {
                roster.restore_arrival(id, at)?;
            }
        }

        Ok(roster)
    }
}
