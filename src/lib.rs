//! rallypoint library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use chrono::NaiveDateTime;
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Checkin { .. } => cli::commands::checkin::handle(&cli.command, cfg, now),
        Commands::Base { .. } => cli::commands::base::handle(&cli.command, cfg, now),
        Commands::Scan { .. } => cli::commands::scan::handle(&cli.command, cfg, now),
        Commands::Status { .. } => cli::commands::status::handle(&cli.command, cfg, now),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// The reference "now" for this invocation: the hidden --now override when
/// present (deterministic tests), the wall clock otherwise.
fn resolve_now(cli: &Cli) -> AppResult<NaiveDateTime> {
    match &cli.now {
        Some(s) => utils::time::parse_timestamp(s).ok_or_else(|| AppError::InvalidTime(s.clone())),
        None => Ok(utils::date::now()),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    // Apply a command-line DB override, if any
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    let now = resolve_now(&cli)?;

    dispatch(&cli, &cfg, now)
}
