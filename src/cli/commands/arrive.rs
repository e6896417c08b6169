use crate::cli::commands::resolve_selector;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lateness::lateness_minutes;
use crate::core::roster::ArrivalOutcome;
use crate::errors::AppResult;
use crate::store::RosterFile;
use crate::ui::messages::{success, warning};
use crate::utils::time::{Clock, format_minutes, hhmm};

/// Record an arrival against the running shift. The arrival timestamp
/// is written once; repeated calls leave the roster untouched.
pub fn handle(cmd: &Commands, cfg: &Config, clock: &Clock) -> AppResult<()> {
    if let Commands::Arrive { selector } = cmd {
        let store = RosterFile::new(&cfg.roster);
        let mut roster = store.load()?;
        let id = resolve_selector(&roster, selector)?;
        let name = roster
            .get(id)
            .map(|p| p.full_name.clone())
            .unwrap_or_default();

        let now = clock.now();
        match roster.record_arrival(id, now)? {
            ArrivalOutcome::Recorded => {
                store.save(&roster)?;
                let late = roster
                    .get(id)
                    .and_then(|p| lateness_minutes(roster.shift_start(), p.expected, p.arrival));
                match late {
                    Some(m) if m > 0 => success(format!(
                        "'{}' arrived at {} ({} late).",
                        name,
                        hhmm(now),
                        format_minutes(m)
                    )),
                    _ => success(format!("'{}' arrived at {} (on time).", name, hhmm(now))),
                }
            }
            ArrivalOutcome::AlreadyRecorded => {
                warning(format!("'{}' already has an arrival recorded.", name));
            }
            ArrivalOutcome::ShiftNotStarted => {
                warning("Shift has not been started yet. Run 'rmuster start' first.");
            }
            ArrivalOutcome::NotPresent => {
                warning(format!("'{}' is not marked Present.", name));
            }
        }
    }

    Ok(())
}
