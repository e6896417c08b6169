use crate::core::roster::Roster;
use crate::models::status::Status;
use chrono::Duration;

/// Aggregate counters over the whole roster. Always recomputed from the
/// live records; nothing here is cached or persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterStats {
    pub total: usize,
    pub present: usize,
    pub sick: usize,
    pub travel: usize,
    pub arrived: usize,
}

impl RosterStats {
    pub fn compute(roster: &Roster) -> Self {
        let mut s = Self {
            total: 0,
            present: 0,
            sick: 0,
            travel: 0,
            arrived: 0,
        };
        for p in roster.people() {
            s.total += 1;
            match p.status {
                Status::Present => {
                    s.present += 1;
                    if p.arrival.is_some() {
                        s.arrived += 1;
                    }
                }
                Status::Sick => s.sick += 1,
                Status::Travel => s.travel += 1,
            }
        }
        s
    }

    /// Share of Present people that have arrived, 0..=100.
    /// Zero when nobody is Present, never a division error.
    pub fn arrival_percent(&self) -> f64 {
        if self.present == 0 {
            0.0
        } else {
            self.arrived as f64 * 100.0 / self.present as f64
        }
    }

    pub fn percent_of_total(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            count as f64 * 100.0 / self.total as f64
        }
    }
}

/// Arrival percent for the export summary: the numerator counts only
/// arrivals inside the first `horizon_minutes` of the shift, the
/// denominator stays all Present people.
pub fn arrival_percent_within(roster: &Roster, horizon_minutes: i64) -> f64 {
    let start = match roster.shift_start() {
        Some(s) => s,
        None => return 0.0,
    };
    let deadline = start + Duration::minutes(horizon_minutes);

    let mut present = 0usize;
    let mut arrived = 0usize;
    for p in roster.people() {
        if p.status != Status::Present {
            continue;
        }
        present += 1;
        if let Some(at) = p.arrival
            && at >= start
            && at <= deadline
        {
            arrived += 1;
        }
    }

    if present == 0 {
        0.0
    } else {
        arrived as f64 * 100.0 / present as f64
    }
}
