//! Minute-precision timestamps and the pinnable wall clock
//! used by the commands.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, Timelike};

/// Wall clock for timestamping operations. The hidden `--at` flag pins
/// it to a fixed RFC 3339 instant; production resolves to system time.
pub struct Clock {
    pinned: Option<DateTime<Local>>,
}

impl Clock {
    pub fn from_arg(at: Option<&str>) -> AppResult<Self> {
        match at {
            None => Ok(Self { pinned: None }),
            Some(raw) => {
                let dt = DateTime::parse_from_rfc3339(raw)
                    .map_err(|_| AppError::InvalidTimestamp(raw.to_string()))?;
                Ok(Self {
                    pinned: Some(dt.with_timezone(&Local)),
                })
            }
        }
    }

    /// Current instant at minute precision. Seconds never enter arrival
    /// math or the stored snapshot.
    pub fn now(&self) -> DateTime<Local> {
        truncate_to_minute(self.pinned.unwrap_or_else(Local::now))
    }
}

pub fn truncate_to_minute(dt: DateTime<Local>) -> DateTime<Local> {
    dt.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(dt)
}

pub fn hhmm(dt: DateTime<Local>) -> String {
    dt.format("%H:%M").to_string()
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
