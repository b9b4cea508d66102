use crate::cli::commands::parse_checkpoint;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::checkin::CheckInLogic;
use crate::core::scan::parse_scan_payload;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::CheckInSource;
use crate::ui::messages::{success, warning};
use crate::utils::time::format_timestamp;
use chrono::NaiveDateTime;

/// Hand one decoded QR payload to the check-in flow.
///
/// A payload that is not a participant number is noise from optical
/// capture: it is discarded without a check-in and without a hard failure.
pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Scan {
        checkpoint,
        payload,
    } = cmd
    {
        let cp = parse_checkpoint(*checkpoint)?;

        let Some(participant) = parse_scan_payload(payload) else {
            warning(format!("Discarded scan payload '{}'.", payload.trim()));
            return Ok(());
        };

        let mut pool = DbPool::new(&cfg.database)?;

        let record = CheckInLogic::apply(
            &mut pool,
            cp,
            participant,
            now,
            now,
            cfg.grace_minutes,
            CheckInSource::Scan,
        )?;

        success(format!(
            "Scanned participant {} checked in at checkpoint {} ({}).",
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
