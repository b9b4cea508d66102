use crate::cli::commands::{parse_checkpoint, resolve_timestamp};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkin::CheckInLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::{CheckInSource, Participant};
use crate::ui::messages::success;
use crate::utils::time::format_timestamp;
use chrono::NaiveDateTime;

/// Record a checkpoint's base time as the participant-0 anchor.
///
/// The anchor is exempt from the grace window: any timestamp is accepted,
/// past or future.
pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Base {
        checkpoint,
        at,
        date,
    } = cmd
    {
        let cp = parse_checkpoint(*checkpoint)?;
        let timestamp = resolve_timestamp(date.as_ref(), at.as_ref(), now)?;

        let mut pool = DbPool::new(&cfg.database)?;

        let record = CheckInLogic::apply(
            &mut pool,
            cp,
            Participant::base_anchor(),
            timestamp,
            now,
            cfg.grace_minutes,
            CheckInSource::Manual,
        )?;

        success(format!(
            "Base time for checkpoint {} set to {}.",
            record.checkpoint,
            record
                .timestamp
                .map(format_timestamp)
                .unwrap_or_default(),
        ));
    }

    Ok(())
}
