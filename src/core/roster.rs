use crate::errors::{AppError, AppResult};
use crate::models::offset::ExpectedOffset;
use crate::models::person::{Person, PersonId};
use crate::models::position::Position;
use crate::models::status::Status;
use chrono::{DateTime, Local};

/// Outcome of an arrival request. Only `Recorded` mutates the roster;
/// the other outcomes report why nothing changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrivalOutcome {
    Recorded,
    AlreadyRecorded,
    ShiftNotStarted,
    NotPresent,
}

/// In-memory roster for one shift: the shift timer plus the people list,
/// kept sorted by case-insensitive full name. Row numbers shown to the
/// user are 1-based positions in that order and are never stored.
pub struct Roster {
    shift_start: Option<DateTime<Local>>,
    people: Vec<Person>,
    next_id: u32,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            shift_start: None,
            people: Vec::new(),
            next_id: 1,
        }
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn shift_start(&self) -> Option<DateTime<Local>> {
        self.shift_start
    }

    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// Row number (1-based) → handle, following the current sort order.
    pub fn id_at_seq(&self, seq: usize) -> Option<PersonId> {
        if seq == 0 {
            return None;
        }
        self.people.get(seq - 1).map(|p| p.id)
    }

    /// All handles whose full name matches exactly, ignoring case.
    pub fn find_by_name(&self, name: &str) -> Vec<PersonId> {
        let needle = name.trim().to_lowercase();
        self.people
            .iter()
            .filter(|p| p.full_name.to_lowercase() == needle)
            .map(|p| p.id)
            .collect()
    }

    /// Duplicate names are legal; callers use this to decide whether to
    /// ask the operator before inserting.
    pub fn has_duplicate_name(&self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        self.people.iter().any(|p| p.full_name.to_lowercase() == needle)
    }

    pub fn add_person(
        &mut self,
        full_name: &str,
        position: Position,
        expected: ExpectedOffset,
        status: Status,
    ) -> AppResult<PersonId> {
        let name = full_name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyName);
        }

        let id = PersonId(self.next_id);
        self.next_id += 1;
        self.people
            .push(Person::new(id, name.to_string(), position, expected, status));
        self.resort();
        Ok(id)
    }

    pub fn remove(&mut self, id: PersonId) -> AppResult<Person> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| AppError::PersonNotFound(id.to_string()))?;
        Ok(self.people.remove(idx))
    }

    /// All-or-nothing batch removal: every handle is checked before the
    /// first one is deleted.
    pub fn remove_many(&mut self, ids: &[PersonId]) -> AppResult<usize> {
        for id in ids {
            if self.index_of(*id).is_none() {
                return Err(AppError::PersonNotFound(id.to_string()));
            }
        }
        let before = self.people.len();
        self.people.retain(|p| !ids.contains(&p.id));
        Ok(before - self.people.len())
    }

    pub fn clear_people(&mut self) {
        self.people.clear();
    }

    pub fn rename(&mut self, id: PersonId, new_name: &str) -> AppResult<()> {
        let name = new_name.trim();
        if name.is_empty() {
            return Err(AppError::EmptyName);
        }
        let idx = self
            .index_of(id)
            .ok_or_else(|| AppError::PersonNotFound(id.to_string()))?;
        self.people[idx].full_name = name.to_string();
        self.resort();
        Ok(())
    }

    pub fn set_position(&mut self, id: PersonId, position: Position) -> AppResult<()> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| AppError::PersonNotFound(id.to_string()))?;
        self.people[idx].position = position;
        Ok(())
    }

    pub fn set_expected(&mut self, id: PersonId, expected: ExpectedOffset) -> AppResult<()> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| AppError::PersonNotFound(id.to_string()))?;
        self.people[idx].expected = expected;
        Ok(())
    }

    /// Changing the status never touches a recorded arrival, even when
    /// the person stops being Present.
    pub fn set_status(&mut self, id: PersonId, status: Status) -> AppResult<()> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| AppError::PersonNotFound(id.to_string()))?;
        self.people[idx].status = status;
        Ok(())
    }

    /// Set the shift timer. Starting again is an intentional restart and
    /// simply overwrites; the previous start is returned for reporting.
    pub fn start_shift(&mut self, now: DateTime<Local>) -> Option<DateTime<Local>> {
        self.shift_start.replace(now)
    }

    /// Clear the shift timer, every arrival and every status (back to
    /// Present). Names, positions and offsets stay untouched.
    pub fn reset_shift_data(&mut self) {
        self.shift_start = None;
        for p in &mut self.people {
            p.arrival = None;
            p.status = Status::Present;
        }
    }

    /// Record the arrival timestamp, at most once per person per shift.
    /// Refusals come back as outcomes, not errors: the command reports
    /// them as warnings and the roster stays untouched.
    pub fn record_arrival(
        &mut self,
        id: PersonId,
        now: DateTime<Local>,
    ) -> AppResult<ArrivalOutcome> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| AppError::PersonNotFound(id.to_string()))?;

        if self.shift_start.is_none() {
            return Ok(ArrivalOutcome::ShiftNotStarted);
        }
        if self.people[idx].arrival.is_some() {
            return Ok(ArrivalOutcome::AlreadyRecorded);
        }
        if self.people[idx].status != Status::Present {
            return Ok(ArrivalOutcome::NotPresent);
        }

        self.people[idx].arrival = Some(now);
        Ok(ArrivalOutcome::Recorded)
    }

    /// Reattach a persisted arrival while loading a snapshot. The live
    /// recording guards do not apply here: a saved roster may carry an
    /// arrival on a person who later stopped being Present.
    pub fn restore_arrival(&mut self, id: PersonId, at: DateTime<Local>) -> AppResult<()> {
        let idx = self
            .index_of(id)
            .ok_or_else(|| AppError::PersonNotFound(id.to_string()))?;
        self.people[idx].arrival = Some(at);
        Ok(())
    }

    /// Bulk name ingestion. Blank rows are skipped; a row duplicating an
    /// existing name goes through `confirm` before being inserted. Every
    /// insert gets Unknown position, the minimum offset and Present.
    /// Returns the number of people actually added.
    pub fn import_names<F>(&mut self, rows: &[String], mut confirm: F) -> usize
    where
        F: FnMut(&str) -> bool,
    {
        let mut inserted = 0;
        for raw in rows {
            let name = raw.trim();
            if name.is_empty() {
                continue;
            }
            if self.has_duplicate_name(name) && !confirm(name) {
                continue;
            }
            if self
                .add_person(name, Position::Unknown, ExpectedOffset::default(), Status::Present)
                .is_ok()
            {
                inserted += 1;
            }
        }
        inserted
    }

    fn index_of(&self, id: PersonId) -> Option<usize> {
        self.people.iter().position(|p| p.id == id)
    }

    fn resort(&mut self) {
        self.people.sort_by_key(|p| p.sort_key());
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
