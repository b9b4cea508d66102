#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Reference clock shared by most tests (minute precision, like every
/// stored timestamp).
pub const NOW: &str = "2025-06-07 09:05";

pub fn rp() -> Command {
    cargo_bin_cmd!("rallypoint")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rallypoint.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a fresh output directory inside tempdir for export tests
pub fn temp_out_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rallypoint_out", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_dir_all(&p).ok();
    fs::create_dir_all(&p).expect("create export dir");
    p
}

/// Initialize the DB schema (uses --test init so no config file is written)
pub fn init_db(db_path: &str) {
    rp().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize the DB and record a base time plus a couple of check-ins,
/// a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    // base time 09:00 at checkpoint 3
    rp().args([
        "--db", db_path, "--now", NOW, "base", "3", "--at", "09:00", "--date", "2025-06-07",
    ])
    .assert()
    .success();

    // two participants checked in
    rp().args([
        "--db", db_path, "--now", NOW, "checkin", "3", "2", "--at", "09:04", "--date",
        "2025-06-07",
    ])
    .assert()
    .success();

    rp().args([
        "--db", db_path, "--now", NOW, "checkin", "3", "7", "--at", "09:05", "--date",
        "2025-06-07",
    ])
    .assert()
    .success();
}

/// Direct store lookup for assertions on persisted state.
pub fn find_timestamp(db_path: &str, checkpoint: u8, participant: u8) -> Option<String> {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    let cp = rallypoint::models::Checkpoint::new(checkpoint).expect("checkpoint in range");
    let p = rallypoint::models::Participant::new(participant).expect("participant in range");

    rallypoint::db::store::find_record(&conn, cp, p)
        .expect("find record")
        .and_then(|rec| rec.timestamp)
        .map(rallypoint::utils::time::format_timestamp)
}

/// Number of rows stored for a (checkpoint, participant) pair.
pub fn count_rows(db_path: &str, checkpoint: u8, participant: u8) -> i64 {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    conn.query_row(
        "SELECT COUNT(*) FROM checkins WHERE checkpoint_id = ?1 AND participant_id = ?2",
        [checkpoint as i64, participant as i64],
        |row| row.get(0),
    )
    .expect("count rows")
}
