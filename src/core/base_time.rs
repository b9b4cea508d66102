//! Base time resolution for a checkpoint.
//!
//! The "zero" time every ideal arrival is offset from. Resolution order:
//! the durable participant-0 record wins, then a transient operator
//! override, then the start of the current hour. Staff typically set an
//! approximate override before the event starts and record the official
//! start as participant 0 once it happens; from then on the saved record
//! takes precedence. Callers re-resolve on every use; nothing is cached.

use crate::db::store;
use crate::errors::AppResult;
use crate::models::{Checkpoint, Participant};
use crate::utils::time::truncate_to_hour;
use chrono::NaiveDateTime;
use rusqlite::Connection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseTimeSource {
    /// Durable participant-0 record.
    Recorded,
    /// Transient operator override, not yet saved.
    Override,
    /// No record, no override: start of the current hour.
    HourDefault,
}

impl BaseTimeSource {
    pub fn describe(&self) -> &'static str {
        match self {
            BaseTimeSource::Recorded => "recorded",
            BaseTimeSource::Override => "override",
            BaseTimeSource::HourDefault => "default (top of hour)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseTime {
    pub time: NaiveDateTime,
    pub source: BaseTimeSource,
}

/// Pure resolution: (stored record, optional override, now) → base time.
pub fn resolve(
    stored: Option<NaiveDateTime>,
    override_time: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> BaseTime {
    if let Some(t) = stored {
        return BaseTime {
            time: t,
            source: BaseTimeSource::Recorded,
        };
    }

    if let Some(t) = override_time {
        return BaseTime {
            time: t,
            source: BaseTimeSource::Override,
        };
    }

    BaseTime {
        time: truncate_to_hour(now),
        source: BaseTimeSource::HourDefault,
    }
}

/// Look up the participant-0 record for the checkpoint, then resolve.
pub fn load_and_resolve(
    conn: &Connection,
    checkpoint: Checkpoint,
    override_time: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> AppResult<BaseTime> {
    let stored = store::find_record(conn, checkpoint, Participant::base_anchor())?
        .and_then(|rec| rec.timestamp);

    Ok(resolve(stored, override_time, now))
}
