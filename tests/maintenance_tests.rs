mod common;
use common::{NOW, init_db, rp, setup_test_db};
use predicates::str::contains;

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("init_schema");

    rp().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    for table in ["checkins", "log"] {
        let found: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                [table],
                |row| row.get(0),
            )
            .expect("query sqlite_master");
        assert_eq!(found, 1, "table {table} should exist");
    }
}

#[test]
fn test_db_check_passes_on_fresh_database() {
    let db_path = setup_test_db("db_check");
    init_db(&db_path);

    rp().args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_db_migrate_is_idempotent() {
    let db_path = setup_test_db("db_migrate_twice");
    init_db(&db_path);

    for _ in 0..2 {
        rp().args(["--db", &db_path, "db", "--migrate"])
            .assert()
            .success()
            .stdout(contains("Migration completed"));
    }
}

#[test]
fn test_db_info_reports_checkin_counts() {
    let db_path = setup_test_db("db_info");
    common::init_db_with_data(&db_path);

    rp().args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Records:"))
        .stdout(contains("CP03:   2/100"));
}

#[test]
fn test_log_records_checkins_and_exports() {
    let db_path = setup_test_db("log_audit");
    init_db(&db_path);

    rp().args([
        "--db", &db_path, "--now", NOW, "checkin", "3", "5", "--at", "09:04", "--date",
        "2025-06-07",
    ])
    .assert()
    .success();

    let out_dir = common::temp_out_dir("log_audit");
    rp().args(["--db", &db_path, "export", "3", "--dir", &out_dir])
        .assert()
        .success();

    rp().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("cp 3 / participant 5"))
        .stdout(contains("Recorded 2025-06-07 09:04 (manual)"))
        .stdout(contains("Exported 100 rows"));
}

#[test]
fn test_config_print_shows_overridden_database() {
    let db_path = setup_test_db("config_print");
    init_db(&db_path);

    rp().args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("Current configuration"))
        .stdout(contains(&db_path));
}

#[test]
fn test_config_check_accepts_defaults() {
    let db_path = setup_test_db("config_check");

    rp().args(["--db", &db_path, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration is valid"));
}
