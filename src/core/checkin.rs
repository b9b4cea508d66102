//! High-level business logic for recording a check-in.

use crate::core::window::allowed_window;
use crate::db::pool::DbPool;
use crate::db::{log, store};
use crate::errors::{AppError, AppResult};
use crate::models::{CheckInRecord, CheckInSource, Checkpoint, Participant};
use crate::utils::time::format_timestamp;
use chrono::NaiveDateTime;

pub struct CheckInLogic;

impl CheckInLogic {
    /// Validate `timestamp` against the allowed window and persist it as
    /// the unique record for (checkpoint, participant).
    ///
    /// On a window violation nothing is written. The audit-log append runs
    /// after the upsert and is reported but never fails the check-in.
    pub fn apply(
        pool: &mut DbPool,
        checkpoint: Checkpoint,
        participant: Participant,
        timestamp: NaiveDateTime,
        now: NaiveDateTime,
        grace_minutes: i64,
        source: CheckInSource,
    ) -> AppResult<CheckInRecord> {
        let window = allowed_window(participant, now, grace_minutes);

        if !window.contains(timestamp) {
            // earliest is the only finite bound the window can have
            let earliest = window
                .earliest
                .map(format_timestamp)
                .unwrap_or_else(|| "unbounded".to_string());

            return Err(AppError::OutOfWindow {
                attempted: format_timestamp(timestamp),
                earliest,
            });
        }

        let record = store::upsert_record(&pool.conn, checkpoint, participant, timestamp, source)?;

        let operation = if participant.is_base_anchor() {
            "base"
        } else {
            "checkin"
        };

        if let Err(e) = log::audit(
            &pool.conn,
            operation,
            &format!("cp {} / participant {}", checkpoint, participant),
            &format!("Recorded {} ({})", format_timestamp(timestamp), source.to_db_str()),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(record)
    }
}
