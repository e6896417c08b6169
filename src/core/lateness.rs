use crate::models::offset::ExpectedOffset;
use crate::models::status::Status;
use chrono::{DateTime, Duration, Local};

/// Presentation bucket for one roster row. Derived on every read,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrivalMark {
    /// Present, no arrival yet.
    Pending,
    /// Present, arrived inside the allowed offset.
    OnTime,
    /// Present, arrived after the allowed offset.
    Late,
    /// Not marked Present (sick or travelling).
    Other,
}

/// Minutes late against shift start plus the allowed arrival offset.
/// Undefined (None) until both the shift timer and the arrival exist.
/// Early arrivals clamp to zero; there is no negative lateness.
pub fn lateness_minutes(
    shift_start: Option<DateTime<Local>>,
    expected: ExpectedOffset,
    arrival: Option<DateTime<Local>>,
) -> Option<i64> {
    let start = shift_start?;
    let at = arrival?;
    let deadline = start + Duration::minutes(expected.minutes());
    Some((at - deadline).num_minutes().max(0))
}

pub fn classify(status: Status, lateness: Option<i64>) -> ArrivalMark {
    if status != Status::Present {
        return ArrivalMark::Other;
    }
    match lateness {
        Some(m) if m > 0 => ArrivalMark::Late,
        Some(_) => ArrivalMark::OnTime,
        None => ArrivalMark::Pending,
    }
}
