use crate::errors::{AppError, AppResult};
use crate::export::model::{ExportRow, headers};
use csv::Writer;
use std::path::Path;

/// Write rows to CSV with the fixed `checkpoint_id,participant_id,date,time`
/// header. Empty date/time cells stay empty strings.
pub fn write_csv(path: &Path, rows: &[ExportRow]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(headers())
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for row in rows {
        wtr.write_record(&[
            row.checkpoint_id.to_string(),
            row.participant_id.to_string(),
            row.date.clone(),
            row.time.clone(),
        ])
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    Ok(())
}
