use crate::cli::commands::{parse_checkpoint, parse_participant, resolve_timestamp};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkin::CheckInLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::CheckInSource;
use crate::ui::messages::success;
use crate::utils::time::format_timestamp;
use chrono::NaiveDateTime;

/// Record a manual check-in for one participant at one checkpoint.
pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Checkin {
        checkpoint,
        participant,
        at,
        date,
    } = cmd
    {
        let cp = parse_checkpoint(*checkpoint)?;
        let p = parse_participant(*participant)?;
        let timestamp = resolve_timestamp(date.as_ref(), at.as_ref(), now)?;

        let mut pool = DbPool::new(&cfg.database)?;

        let record = CheckInLogic::apply(
            &mut pool,
            cp,
            p,
            timestamp,
            now,
            cfg.grace_minutes,
            CheckInSource::Manual,
        )?;

        success(format!(
            "Participant {} checked in at checkpoint {} ({}).",
            record.participant,
            record.checkpoint,
            record
                .timestamp
                .map(format_timestamp)
                .unwrap_or_default(),
        ));
    }

    Ok(())
}
