// src/tabular/model.rs

use crate::core::lateness::lateness_minutes;
use crate::core::roster::Roster;
use crate::utils::time::format_minutes;
use serde::Serialize;

/// Placeholder for people without a recorded arrival.
pub(crate) const NOT_ARRIVED: &str = "not arrived";

/// Flat row shape shared by the CSV and XLSX writers.
#[derive(Serialize, Clone, Debug)]
pub struct ExportRow {
    pub position: String,
    pub full_name: String,
    pub expected: String,
    pub arrival: String,
    pub lateness: String,
    pub status: String,
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "position",
        "full_name",
        "expected",
        "arrival",
        "lateness",
        "status",
    ]
}

pub(crate) fn row_to_cells(r: &ExportRow) -> Vec<String> {
    vec![
        r.position.clone(),
        r.full_name.clone(),
        r.expected.clone(),
        r.arrival.clone(),
        r.lateness.clone(),
        r.status.clone(),
    ]
}

/// One export row per person, in roster order. Lateness stays blank
/// until an arrival exists.
pub(crate) fn roster_to_rows(roster: &Roster) -> Vec<ExportRow> {
    roster
        .people()
        .iter()
        .map(|p| {
            let late = lateness_minutes(roster.shift_start(), p.expected, p.arrival);
            ExportRow {
                position: p.position.label().to_string(),
                full_name: p.full_name.clone(),
                expected: p.expected.label().to_string(),
                arrival: p
                    .arrival_hhmm()
                    .unwrap_or_else(|| NOT_ARRIVED.to_string()),
                lateness: late.map(format_minutes).unwrap_or_default(),
                status: p.status.label().to_string(),
            }
        })
        .collect()
}
