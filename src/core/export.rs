//! Export orchestration for one checkpoint's results.

use crate::db::pool::DbPool;
use crate::db::{log, store};
use crate::errors::{AppError, AppResult};
use crate::export::model::{ExportRow, export_filename};
use crate::export::{ExportFormat, csv, json};
use crate::models::{Checkpoint, Participant};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub struct ExportLogic;

impl ExportLogic {
    /// Fixed-schema rows for a checkpoint: exactly one row per entrant
    /// 1..=100, ascending, with empty date/time for anyone not yet checked
    /// in. The base anchor (participant 0) is excluded. Pure read.
    pub fn rows(pool: &mut DbPool, checkpoint: Checkpoint) -> AppResult<Vec<ExportRow>> {
        let times = store::list_by_checkpoint(&pool.conn, checkpoint)?;

        Ok(Participant::all()
            .map(|p| ExportRow::new(checkpoint, p, times.get(&p.id()).copied()))
            .collect())
    }

    /// Write a checkpoint's rows to `<prefix>-<checkpoint>-participants.<ext>`
    /// inside `dir`. Returns the written path.
    pub fn export(
        pool: &mut DbPool,
        checkpoint: Checkpoint,
        format: &ExportFormat,
        dir: &Path,
        prefix: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        if !dir.is_dir() {
            return Err(AppError::Export(format!(
                "Output directory does not exist: {}",
                dir.display()
            )));
        }

        let path = dir.join(export_filename(prefix, checkpoint, format.extension()));
        ensure_writable(&path, force)?;

        let rows = Self::rows(pool, checkpoint)?;

        match format {
            ExportFormat::Csv => csv::write_csv(&path, &rows)?,
            ExportFormat::Json => json::write_json(&path, &rows)?,
        }

        if let Err(e) = log::audit(
            &pool.conn,
            "export",
            &format!("cp {}", checkpoint),
            &format!("Exported {} rows to {}", rows.len(), path.display()),
        ) {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(path)
    }
}

/// Refuse to clobber an existing file unless forced or confirmed.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    eprint!(
        "⚠️  File '{}' already exists. Overwrite? [y/N]: ",
        path.display()
    );
    io::stderr().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer).map_err(AppError::from)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        Ok(())
    } else {
        Err(AppError::Export(
            "cancelled: existing file not overwritten".into(),
        ))
    }
}
