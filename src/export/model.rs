use crate::models::{Checkpoint, Participant};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Flat per-participant row, one per entrant 1..=100.
///
/// `date`/`time` are preformatted (`dd-MM-yyyy` / `HH:mm`) and empty when
/// the participant has no recorded time.
#[derive(Serialize, Clone, Debug)]
pub struct ExportRow {
    pub checkpoint_id: u8,
    pub participant_id: u8,
    pub date: String,
    pub time: String,
}

impl ExportRow {
    pub fn new(
        checkpoint: Checkpoint,
        participant: Participant,
        timestamp: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            checkpoint_id: checkpoint.id(),
            participant_id: participant.id(),
            date: timestamp
                .map(|ts| ts.format("%d-%m-%Y").to_string())
                .unwrap_or_default(),
            time: timestamp
                .map(|ts| ts.format("%H:%M").to_string())
                .unwrap_or_default(),
        }
    }
}

/// Column order for every export format.
pub fn headers() -> Vec<&'static str> {
    vec!["checkpoint_id", "participant_id", "date", "time"]
}

/// `<prefix>-<checkpoint>-participants.<ext>`
pub fn export_filename(prefix: &str, checkpoint: Checkpoint, ext: &str) -> String {
    format!("{}-{}-participants.{}", prefix, checkpoint, ext)
}
