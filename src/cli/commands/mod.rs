pub mod base;
pub mod checkin;
pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod scan;
pub mod status;

use crate::errors::{AppError, AppResult};
use crate::models::{Checkpoint, Participant};
use crate::utils::{date, time};
use chrono::NaiveDateTime;

/// Validate a checkpoint argument.
pub(crate) fn parse_checkpoint(n: u8) -> AppResult<Checkpoint> {
    Checkpoint::new(n).ok_or_else(|| AppError::InvalidCheckpoint(n.to_string()))
}

/// Validate a participant argument.
pub(crate) fn parse_participant(n: u8) -> AppResult<Participant> {
    Participant::new(n).ok_or_else(|| AppError::InvalidParticipant(n.to_string()))
}

/// Build a check-in timestamp from optional --date / --at flags, falling
/// back to `now` for whichever part is missing.
pub(crate) fn resolve_timestamp(
    date_arg: Option<&String>,
    at_arg: Option<&String>,
    now: NaiveDateTime,
) -> AppResult<NaiveDateTime> {
    let d = match date_arg {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?,
        None => now.date(),
    };

    let t = match time::parse_optional_time(at_arg)? {
        Some(t) => t,
        None => now.time(),
    };

    Ok(d.and_time(t))
}
