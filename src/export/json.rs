use crate::errors::{AppError, AppResult};
use crate::export::model::ExportRow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn write_json(path: &Path, rows: &[ExportRow]) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    Ok(())
}
