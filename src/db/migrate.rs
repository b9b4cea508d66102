use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `checkins` table exists.
fn checkins_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='checkins'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `checkins` table has a `source` column.
fn checkins_has_source_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('checkins')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "source" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `checkins` table with the modern schema (including `source`).
///
/// One row per (checkpoint, participant) pair; the primary key makes the
/// upsert-by-key invariant a schema guarantee, not a convention.
fn create_checkins_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS checkins (
            checkpoint_id  INTEGER NOT NULL CHECK(checkpoint_id BETWEEN 1 AND 20),
            participant_id INTEGER NOT NULL CHECK(participant_id BETWEEN 0 AND 100),
            timestamp      TEXT,
            source         TEXT NOT NULL DEFAULT 'manual' CHECK(source IN ('manual','scan')),
            created_at     TEXT NOT NULL,
            updated_at     TEXT NOT NULL,
            PRIMARY KEY (checkpoint_id, participant_id)
        );

        CREATE INDEX IF NOT EXISTS idx_checkins_checkpoint ON checkins(checkpoint_id);
        "#,
    )?;
    Ok(())
}

/// Migrate a pre-0.4 `checkins` table to include the `source` column.
fn migrate_add_source_column(conn: &Connection) -> Result<()> {
    let version = "20250601_0004_add_checkin_source";

    // Already applied?
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    if checkins_has_source_column(conn)? {
        return Ok(());
    }

    warning("Adding 'source' column to checkins table...");

    conn.execute(
        "ALTER TABLE checkins ADD COLUMN source TEXT NOT NULL DEFAULT 'manual';",
        [],
    )?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added source column to checkins')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'source' to checkins table",
        version
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db() and `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Ensure checkins table
    if !checkins_table_exists(conn)? {
        create_checkins_table(conn)?;
        success("Created checkins table (modern schema).");
    } else {
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_checkins_checkpoint ON checkins(checkpoint_id);
            "#,
        )?;

        migrate_add_source_column(conn)?;
    }

    Ok(())
}
