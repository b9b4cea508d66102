use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL RECORDS
    //
    let records: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM checkins", [], |row| row.get(0))?;

    let checked: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM checkins
         WHERE participant_id > 0 AND timestamp IS NOT NULL",
        [],
        |row| row.get(0),
    )?;

    println!(
        "{}• Records:{} {}{}{} ({} participant check-ins)",
        CYAN, RESET, GREEN, records, RESET, checked
    );

    //
    // 3) TIMESTAMP RANGE
    //
    let first_ts: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM checkins
             WHERE timestamp IS NOT NULL
             ORDER BY timestamp ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_ts: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM checkins
             WHERE timestamp IS NOT NULL
             ORDER BY timestamp DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_ts.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_ts.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Check-in range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) PER-CHECKPOINT COMPLETION
    //
    let mut stmt = pool.conn.prepare(
        "SELECT checkpoint_id, COUNT(*) FROM checkins
         WHERE participant_id > 0 AND timestamp IS NOT NULL
         GROUP BY checkpoint_id
         ORDER BY checkpoint_id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?))
    })?;

    let mut lines = Vec::new();
    for r in rows {
        let (cp, n) = r?;
        lines.push(format!("CP{:02}: {:>3}/100", cp, n));
    }

    if !lines.is_empty() {
        println!("{}• Checked in per checkpoint:{}", CYAN, RESET);
        for chunk in lines.chunks(4) {
            println!("    {}", chunk.join("   "));
        }
    }

    println!();
    Ok(())
}
