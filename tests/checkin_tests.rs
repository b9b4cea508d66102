use predicates::str::contains;

mod common;
use common::{NOW, count_rows, find_timestamp, init_db, rp, setup_test_db};

#[test]
fn test_checkin_roundtrip() {
    let db_path = setup_test_db("checkin_roundtrip");
    init_db(&db_path);

    rp().args([
        "--db", &db_path, "--now", NOW, "checkin", "3", "5", "--at", "09:04", "--date",
        "2025-06-07",
    ])
    .assert()
    .success()
    .stdout(contains("Participant 5 checked in at checkpoint 3"));

    assert_eq!(
        find_timestamp(&db_path, 3, 5).as_deref(),
        Some("2025-06-07 09:04")
    );
}

#[test]
fn test_checkin_twice_keeps_one_row_with_latest() {
    let db_path = setup_test_db("checkin_upsert");
    init_db(&db_path);

    rp().args([
        "--db", &db_path, "--now", NOW, "checkin", "4", "9", "--at", "09:04", "--date",
        "2025-06-07",
    ])
    .assert()
    .success();

    rp().args([
        "--db", &db_path, "--now", NOW, "checkin", "4", "9", "--at", "09:05", "--date",
        "2025-06-07",
    ])
    .assert()
    .success();

    assert_eq!(count_rows(&db_path, 4, 9), 1);
    assert_eq!(
        find_timestamp(&db_path, 4, 9).as_deref(),
        Some("2025-06-07 09:05")
    );
}

#[test]
fn test_checkin_three_minutes_ago_rejected() {
    let db_path = setup_test_db("checkin_too_old");
    init_db(&db_path);

    // now = 09:05, grace = 2 minutes → 09:03 is the earliest allowed
    rp().args([
        "--db", &db_path, "--now", NOW, "checkin", "3", "5", "--at", "09:03", "--date",
        "2025-06-07",
    ])
    .assert()
    .success();

    rp().args([
        "--db", &db_path, "--now", NOW, "checkin", "3", "6", "--at", "09:02", "--date",
        "2025-06-07",
    ])
    .assert()
    .failure()
    .stderr(contains("outside the allowed window"));

    // the rejected attempt must not have written anything
    assert_eq!(count_rows(&db_path, 3, 6), 0);
}

#[test]
fn test_checkin_one_minute_ago_succeeds() {
    let db_path = setup_test_db("checkin_recent");
    init_db(&db_path);

    rp().args([
        "--db", &db_path, "--now", NOW, "checkin", "3", "5", "--at", "09:04", "--date",
        "2025-06-07",
    ])
    .assert()
    .success();
}

#[test]
fn test_checkin_far_future_succeeds() {
    // latest bound is unbounded: late arrivals are always recordable
    let db_path = setup_test_db("checkin_future");
    init_db(&db_path);

    rp().args([
        "--db", &db_path, "--now", NOW, "checkin", "3", "5", "--at", "18:30", "--date",
        "2025-06-08",
    ])
    .assert()
    .success();
}

#[test]
fn test_base_accepts_any_timestamp() {
    let db_path = setup_test_db("base_any_time");
    init_db(&db_path);

    // far in the past
    rp().args([
        "--db", &db_path, "--now", NOW, "base", "3", "--at", "06:00", "--date", "2020-01-01",
    ])
    .assert()
    .success()
    .stdout(contains("Base time for checkpoint 3"));

    assert_eq!(
        find_timestamp(&db_path, 3, 0).as_deref(),
        Some("2020-01-01 06:00")
    );

    // far in the future, same single row
    rp().args([
        "--db", &db_path, "--now", NOW, "base", "3", "--at", "23:59", "--date", "2030-12-31",
    ])
    .assert()
    .success();

    assert_eq!(count_rows(&db_path, 3, 0), 1);
    assert_eq!(
        find_timestamp(&db_path, 3, 0).as_deref(),
        Some("2030-12-31 23:59")
    );
}

#[test]
fn test_checkin_rejects_out_of_range_ids() {
    let db_path = setup_test_db("checkin_bad_ids");
    init_db(&db_path);

    rp().args(["--db", &db_path, "--now", NOW, "checkin", "21", "5"])
        .assert()
        .failure()
        .stderr(contains("Invalid checkpoint"));

    rp().args(["--db", &db_path, "--now", NOW, "checkin", "3", "101"])
        .assert()
        .failure()
        .stderr(contains("Invalid participant"));
}

#[test]
fn test_scan_valid_payload_checks_in() {
    let db_path = setup_test_db("scan_valid");
    init_db(&db_path);

    rp().args(["--db", &db_path, "--now", NOW, "scan", "3", "42"])
        .assert()
        .success()
        .stdout(contains("Scanned participant 42 checked in at checkpoint 3"));

    assert_eq!(find_timestamp(&db_path, 3, 42).as_deref(), Some(NOW));
}

#[test]
fn test_scan_garbage_payload_discarded() {
    let db_path = setup_test_db("scan_garbage");
    init_db(&db_path);

    for payload in ["hello", "12abc", "-5", "1000", "101", "0", ""] {
        rp().args(["--db", &db_path, "--now", NOW, "scan", "3", payload])
            .assert()
            .success()
            .stdout(contains("Discarded scan payload"));
    }

    // no check-in was triggered by any of them
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM checkins", [], |row| row.get(0))
        .expect("count");
    assert_eq!(count, 0);
}

#[test]
fn test_scan_payload_with_whitespace_accepted() {
    let db_path = setup_test_db("scan_trimmed");
    init_db(&db_path);

    rp().args(["--db", &db_path, "--now", NOW, "scan", "3", " 7 "])
        .assert()
        .success();

    assert_eq!(find_timestamp(&db_path, 3, 7).as_deref(), Some(NOW));
}
