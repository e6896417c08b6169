use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RosterFile;
use crate::ui::messages::success;
use crate::utils::time::{Clock, hhmm};

/// Start the shift timer, or restart it if one is already running.
pub fn handle(cfg: &Config, clock: &Clock) -> AppResult<()> {
    let store = RosterFile::new(&cfg.roster);
    let mut roster = store.load()?;

    let now = clock.now();
    let previous = roster.start_shift(now);
    store.save(&roster)?;

    match previous {
        Some(old) => success(format!(
            "Shift restarted at {} (was {}).",
            hhmm(now),
            hhmm(old)
        )),
        None => success(format!("Shift started at {}.", hhmm(now))),
    }

    Ok(())
}
