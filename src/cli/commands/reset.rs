use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RosterFile;
use crate::ui::messages::{ask_confirmation, info, success};

/// Clear the shift timer, every arrival and every status. Names,
/// positions and offsets survive.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = RosterFile::new(&cfg.roster);
    let mut roster = store.load()?;

    if !ask_confirmation("Clear the shift timer, all arrivals and statuses? This action is irreversible.")
    {
        info("Operation cancelled.");
        return Ok(());
    }

    roster.reset_shift_data();
    store.save(&roster)?;
    success("Shift data cleared. Everyone is back to Present.");

    Ok(())
}
