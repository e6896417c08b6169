//! rMuster library root.
//! Exposes the CLI parser and the high-level run() entry point.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod tabular;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::time::Clock;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, clock: &Clock) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Start => cli::commands::start::handle(cfg, clock),
        Commands::Arrive { .. } => cli::commands::arrive::handle(&cli.command, cfg, clock),
        Commands::Reset => cli::commands::reset::handle(cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config ONCE
    let mut cfg = Config::load();

    // 3️⃣ apply the roster override from the command line
    if let Some(custom_roster) = &cli.roster {
        cfg.roster = custom_roster.clone();
    }

    // 4️⃣ build the clock (pinned when --at is given)
    let clock = Clock::from_arg(cli.at.as_deref())?;

    // 5️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &clock)
}
