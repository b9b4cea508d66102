use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rallypoint
/// CLI application to track checkpoint check-in times with SQLite
#[derive(Parser)]
#[command(
    name = "rallypoint",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple checkpoint tracking CLI: record participant check-ins and export results using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Override the wall clock, "YYYY-MM-DD HH:MM" (testing)
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or validate)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for invalid fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a participant's check-in at a checkpoint
    Checkin {
        /// Checkpoint number (1-20)
        checkpoint: u8,

        /// Participant number (1-100; 0 is the base-time slot, see `base`)
        participant: u8,

        /// Check-in time (HH:MM), defaults to the current time
        #[arg(long = "at", help = "Check-in time (HH:MM)")]
        at: Option<String>,

        /// Check-in date (YYYY-MM-DD), defaults to today
        #[arg(long = "date", help = "Check-in date (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Set a checkpoint's base time (the participant-0 anchor)
    Base {
        /// Checkpoint number (1-20)
        checkpoint: u8,

        /// Base time (HH:MM), defaults to the current time
        #[arg(long = "at", help = "Base time (HH:MM)")]
        at: Option<String>,

        /// Base date (YYYY-MM-DD), defaults to today
        #[arg(long = "date", help = "Base date (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Hand a decoded QR payload to the check-in flow
    Scan {
        /// Checkpoint number (1-20)
        checkpoint: u8,

        /// Decoded payload string; ignored unless it is a participant number
        #[arg(allow_hyphen_values = true)]
        payload: String,
    },

    /// Show the status board for a checkpoint
    Status {
        /// Checkpoint number (1-20)
        checkpoint: u8,

        /// Unsaved base-time override (HH:MM) for this invocation only
        #[arg(long = "base", help = "Transient base time override (HH:MM)")]
        base: Option<String>,

        #[arg(long = "missing", help = "Show only participants not yet checked in")]
        missing: bool,
    },

    /// Export a checkpoint's results
    Export {
        /// Checkpoint number (1-20)
        checkpoint: u8,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "DIR",
            help = "Output directory (defaults to the current directory)"
        )]
        dir: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
