//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// "2h" for 2.0 hours, "1.5h" for 1.5. Used for the export summary
/// label and the default export file name.
pub fn hours_label(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{}h", hours as i64)
    } else {
        format!("{}h", hours)
    }
}

/// One-decimal percent, e.g. "71.4%".
pub fn percent_label(p: f64) -> String {
    format!("{:.1}%", p)
}
