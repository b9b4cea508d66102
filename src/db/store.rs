//! Record store for check-ins, keyed by (checkpoint, participant).
//!
//! A missing row is an absent result (`Ok(None)`), never an error. The
//! upsert is a single `INSERT .. ON CONFLICT DO UPDATE` statement so the
//! find-then-write sequence cannot interleave with another write.

use crate::errors::{AppError, AppResult};
use crate::models::{CheckInRecord, CheckInSource, Checkpoint, Participant};
use crate::utils::time::{format_timestamp, parse_timestamp};
use chrono::{Local, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::collections::BTreeMap;

pub fn map_row(row: &Row) -> rusqlite::Result<CheckInRecord> {
    let cp_raw: i64 = row.get("checkpoint_id")?;
    let checkpoint = u8::try_from(cp_raw)
        .ok()
        .and_then(Checkpoint::new)
        .ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Integer,
                Box::new(AppError::InvalidCheckpoint(cp_raw.to_string())),
            )
        })?;

    let pid_raw: i64 = row.get("participant_id")?;
    let participant = u8::try_from(pid_raw)
        .ok()
        .and_then(Participant::new)
        .ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Integer,
                Box::new(AppError::InvalidParticipant(pid_raw.to_string())),
            )
        })?;

    let ts_str: Option<String> = row.get("timestamp")?;
    let timestamp = match ts_str {
        None => None,
        Some(s) => Some(parse_timestamp(&s).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidTime(s.clone())),
            )
        })?),
    };

    let source_str: String = row.get("source")?;
    let source = CheckInSource::from_db_str(&source_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!("Invalid source: {}", source_str))),
        )
    })?;

    Ok(CheckInRecord {
        checkpoint,
        participant,
        timestamp,
        source,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

/// Look up the unique record for a (checkpoint, participant) pair.
pub fn find_record(
    conn: &Connection,
    checkpoint: Checkpoint,
    participant: Participant,
) -> AppResult<Option<CheckInRecord>> {
    let mut stmt = conn.prepare_cached(
        "SELECT checkpoint_id, participant_id, timestamp, source, created_at, updated_at
         FROM checkins
         WHERE checkpoint_id = ?1 AND participant_id = ?2",
    )?;

    let record = stmt
        .query_row(params![checkpoint.id(), participant.id()], map_row)
        .optional()?;

    Ok(record)
}

/// Create or update the unique record for a (checkpoint, participant) pair
/// and return it as saved.
pub fn upsert_record(
    conn: &Connection,
    checkpoint: Checkpoint,
    participant: Participant,
    timestamp: NaiveDateTime,
    source: CheckInSource,
) -> AppResult<CheckInRecord> {
    let now_iso = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO checkins (checkpoint_id, participant_id, timestamp, source, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?5)
         ON CONFLICT(checkpoint_id, participant_id) DO UPDATE SET
             timestamp  = excluded.timestamp,
             source     = excluded.source,
             updated_at = excluded.updated_at",
        params![
            checkpoint.id(),
            participant.id(),
            format_timestamp(timestamp),
            source.to_db_str(),
            now_iso,
        ],
    )?;

    find_record(conn, checkpoint, participant)?
        .ok_or_else(|| AppError::Other("upsert did not persist a record".into()))
}

/// All recorded timestamps for one checkpoint, keyed by participant ID.
///
/// Rows with no timestamp are omitted; a participant missing from the map
/// has not checked in. The base anchor (ID 0) is included when set.
pub fn list_by_checkpoint(
    conn: &Connection,
    checkpoint: Checkpoint,
) -> AppResult<BTreeMap<u8, NaiveDateTime>> {
    let mut stmt = conn.prepare_cached(
        "SELECT participant_id, timestamp
         FROM checkins
         WHERE checkpoint_id = ?1 AND timestamp IS NOT NULL
         ORDER BY participant_id ASC",
    )?;

    let rows = stmt.query_map([checkpoint.id()], |row| {
        Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
    })?;

    let mut out = BTreeMap::new();
    for r in rows {
        let (pid_raw, ts_str) = r?;
        let pid = u8::try_from(pid_raw)
            .map_err(|_| AppError::InvalidParticipant(pid_raw.to_string()))?;
        let ts = parse_timestamp(&ts_str).ok_or_else(|| AppError::InvalidTime(ts_str.clone()))?;
        out.insert(pid, ts);
    }

    Ok(out)
}
