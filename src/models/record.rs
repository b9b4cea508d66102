use super::{checkpoint::Checkpoint, participant::Participant, source::CheckInSource};
use chrono::NaiveDateTime;
use serde::Serialize;

/// The sole persisted entity: one row per (checkpoint, participant) pair.
///
/// `timestamp == None` means the participant has not checked in yet at this
/// checkpoint. Participant 0 rows hold the checkpoint's base time instead of
/// a real arrival.
#[derive(Debug, Clone, Serialize)]
pub struct CheckInRecord {
    pub checkpoint: Checkpoint,     // ⇔ checkins.checkpoint_id (INT 1..=20)
    pub participant: Participant,   // ⇔ checkins.participant_id (INT 0..=100)
    pub timestamp: Option<NaiveDateTime>, // ⇔ checkins.timestamp (TEXT "YYYY-MM-DD HH:MM", NULL = not checked in)
    pub source: CheckInSource,      // ⇔ checkins.source ('manual' | 'scan')
    pub created_at: String,         // ⇔ checkins.created_at (TEXT, ISO8601)
    pub updated_at: String,         // ⇔ checkins.updated_at (TEXT, ISO8601)
}

