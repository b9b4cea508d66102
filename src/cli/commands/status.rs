use crate::cli::commands::parse_checkpoint;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::StatusLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::colorize_time_cell;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_timestamp, parse_time};
use chrono::NaiveDateTime;

/// Show the status board for one checkpoint.
pub fn handle(cmd: &Commands, cfg: &Config, now: NaiveDateTime) -> AppResult<()> {
    if let Commands::Status {
        checkpoint,
        base,
        missing,
    } = cmd
    {
        let cp = parse_checkpoint(*checkpoint)?;

        // --base HH:MM is the transient override: today's date, never saved.
        let base_override = match base {
            Some(s) => {
                let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
                Some(now.date().and_time(t))
            }
            None => None,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        let board = StatusLogic::build(&mut pool, cp, base_override, now)?;

        let finish_tag = if cp.is_finish() { " (finish)" } else { "" };
        println!(
            "\nCheckpoint {}{} — base {} [{}]",
            board.checkpoint,
            finish_tag,
            format_timestamp(board.base.time),
            board.base.source.describe(),
        );
        println!("Checked in: {}/100\n", board.checked_count);

        let mut table = Table::new(vec![
            Column::new("#", 4),
            Column::new("Ideal", 6),
            Column::new("Checked in", 16),
        ]);

        for row in &board.rows {
            if *missing && row.recorded.is_some() {
                continue;
            }

            let recorded = row.recorded.map(format_timestamp);
            table.add_row(vec![
                row.participant.to_string(),
                row.ideal.format("%H:%M").to_string(),
                colorize_time_cell(recorded.as_deref()),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
