use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::roster::Roster;
use crate::errors::AppResult;
use crate::store::RosterFile;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - an empty roster snapshot (unless one already exists)
pub fn handle(cli: &Cli) -> AppResult<()> {
    let roster_path = Config::init_all(cli.roster.clone())?;

    println!("⚙️  Initializing rMuster…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Roster file : {}", roster_path.display());

    let store = RosterFile::new(&roster_path.to_string_lossy());
    if !store.path().exists() {
        store.save(&Roster::new())?;
    }

    println!("🎉 rMuster initialization completed!");
    Ok(())
}
