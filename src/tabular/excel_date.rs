// src/tabular/excel_date.rs

use chrono::{NaiveTime, Timelike};

/// Interpret an "HH:MM" cell as an Excel time serial (fraction of a
/// day), so the spreadsheet treats arrivals and lateness as times.
pub(crate) fn hhmm_to_excel_serial(s: &str) -> Option<f64> {
    let t = NaiveTime::parse_from_str(s, "%H:%M").ok()?;
    Some(t.num_seconds_from_midnight() as f64 / 86400.0)
}
