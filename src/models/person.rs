use super::{offset::ExpectedOffset, position::Position, status::Status};
use chrono::{DateTime, Local};
use std::fmt;

/// Opaque roster handle. Stable for the lifetime of a loaded roster,
/// never a row index, reassigned on every load from disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(pub u32);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Person {
    pub id: PersonId,
    pub full_name: String,
    pub position: Position,
    pub expected: ExpectedOffset,
    pub status: Status,
    pub arrival: Option<DateTime<Local>>, // set at most once per shift
}

impl Person {
    pub fn new(
        id: PersonId,
        full_name: String,
        position: Position,
        expected: ExpectedOffset,
        status: Status,
    ) -> Self {
        Self {
            id,
            full_name,
            position,
            expected,
            status,
            arrival: None,
        }
    }

    /// Ordering key for the roster listing.
    pub fn sort_key(&self) -> String {
        self.full_name.to_lowercase()
    }

    pub fn arrival_hhmm(&self) -> Option<String> {
        self.arrival.map(|a| a.format("%H:%M").to_string())
    }
}
