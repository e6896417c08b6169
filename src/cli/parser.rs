use crate::tabular::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rMuster
/// CLI application to keep a shift attendance roster
#[derive(Parser)]
#[command(
    name = "rmuster",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance roster CLI: record shift arrivals and track lateness",
    long_about = None
)]
pub struct Cli {
    /// Override roster file path (useful for tests or custom locations)
    #[arg(global = true, long = "roster")]
    pub roster: Option<String>,

    /// Pin the clock to a fixed RFC 3339 instant
    #[arg(global = true, long = "at", hide = true)]
    pub at: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty roster file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Register a person on the roster
    Add {
        /// Full name of the person
        name: String,

        #[arg(
            long = "pos",
            help = "Position: U=Unknown, E=Engineer, M=Manager, T=Technician, A=Administrator, D=Director"
        )]
        pos: Option<String>,

        #[arg(
            long = "offset",
            help = "Allowed arrival offset: 1h, 1.5h, 2h, 2.5h or 3h"
        )]
        offset: Option<String>,

        #[arg(long = "status", help = "Status: P=Present, S=Sick, T=Travel")]
        status: Option<String>,
    },

    /// Remove people from the roster
    Del {
        /// Row numbers or full names to remove
        #[arg(required_unless_present = "all")]
        selectors: Vec<String>,

        #[arg(long = "all", help = "Remove every person from the roster")]
        all: bool,
    },

    /// Edit a person's fields
    Edit {
        /// Row number or full name
        selector: String,

        #[arg(long = "name", help = "New full name")]
        name: Option<String>,

        #[arg(long = "pos", help = "New position code")]
        pos: Option<String>,

        #[arg(long = "offset", help = "New allowed arrival offset")]
        offset: Option<String>,

        #[arg(long = "status", help = "New status code")]
        status: Option<String>,
    },

    /// Start (or restart) the shift timer
    Start,

    /// Record an arrival
    Arrive {
        /// Row number or full name
        selector: String,
    },

    /// Clear the shift timer, all arrivals and all statuses
    Reset,

    /// Show the roster table and the attendance counters
    List {
        #[arg(long = "find", help = "Filter rows by a name substring")]
        find: Option<String>,
    },

    /// Bulk-load names from the first column of a CSV file
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Export an attendance snapshot
    Export {
        #[arg(long, help = "Arrival horizon in hours for the summary percent")]
        hours: f64,

        #[arg(long, value_enum, help = "Output format (default from config)")]
        format: Option<ExportFormat>,

        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
