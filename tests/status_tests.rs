mod common;
use common::{NOW, init_db, init_db_with_data, rp, setup_test_db};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

#[test]
fn test_status_uses_recorded_base_time() {
    let db_path = setup_test_db("status_recorded_base");
    init_db_with_data(&db_path);

    rp().args(["--db", &db_path, "--now", NOW, "status", "3"])
        .assert()
        .success()
        .stdout(contains("Checkpoint 3"))
        .stdout(contains("base 2025-06-07 09:00 [recorded]"))
        .stdout(contains("Checked in: 2/100"));
}

#[test]
fn test_status_override_applies_only_without_a_record() {
    let db_path = setup_test_db("status_override");
    init_db(&db_path);

    // no record yet → the transient override wins
    rp().args([
        "--db", &db_path, "--now", NOW, "status", "5", "--base", "09:30",
    ])
    .assert()
    .success()
    .stdout(contains("base 2025-06-07 09:30 [override]"));

    // once participant 0 is saved, the durable record wins over the override
    rp().args([
        "--db", &db_path, "--now", NOW, "base", "5", "--at", "08:45", "--date", "2025-06-07",
    ])
    .assert()
    .success();

    rp().args([
        "--db", &db_path, "--now", NOW, "status", "5", "--base", "09:30",
    ])
    .assert()
    .success()
    .stdout(contains("base 2025-06-07 08:45 [recorded]"));
}

#[test]
fn test_status_defaults_to_top_of_hour() {
    let db_path = setup_test_db("status_default_base");
    init_db(&db_path);

    rp().args(["--db", &db_path, "--now", "2025-06-07 09:42", "status", "8"])
        .assert()
        .success()
        .stdout(contains("base 2025-06-07 09:00 [default (top of hour)]"))
        .stdout(contains("Checked in: 0/100"));
}

#[test]
fn test_status_marks_finish_checkpoint() {
    let db_path = setup_test_db("status_finish");
    init_db(&db_path);

    rp().args(["--db", &db_path, "--now", NOW, "status", "20"])
        .assert()
        .success()
        .stdout(contains("Checkpoint 20 (finish)"));

    rp().args(["--db", &db_path, "--now", NOW, "status", "19"])
        .assert()
        .success()
        .stdout(contains("Checkpoint 19 —"));
}

#[test]
fn test_status_missing_filter_hides_checked_participants() {
    let db_path = setup_test_db("status_missing");
    init_db_with_data(&db_path);

    // participant 2 checked in at 09:04; with --missing that row disappears
    // (ideal-time cells show bare HH:MM, recorded cells the full timestamp)
    rp().args(["--db", &db_path, "--now", NOW, "status", "3", "--missing"])
        .assert()
        .success()
        .stdout(contains("Checked in: 2/100"))
        .stdout(contains("2025-06-07 09:04").not())
        .stdout(contains("2025-06-07 09:05").not());
}

#[test]
fn test_status_ideal_times_follow_participant_ids() {
    let db_path = setup_test_db("status_ideal");
    init_db_with_data(&db_path);

    // base 09:00 → participant 5 ideal 09:05, participant 100 ideal 10:40
    let output = rp()
        .args(["--db", &db_path, "--now", NOW, "status", "3"])
        .output()
        .expect("run status");
    let stdout = String::from_utf8_lossy(&output.stdout);

    let row_for = |pid: &str| {
        stdout
            .lines()
            .find(|l| l.split_whitespace().next() == Some(pid))
            .unwrap_or_else(|| panic!("row for participant {pid}"))
            .to_string()
    };

    assert!(row_for("5").contains("09:05"));
    assert!(row_for("100").contains("10:40"));
}
