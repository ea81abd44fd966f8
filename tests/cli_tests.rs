use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{ccl, init_db_with_data, setup_test_db};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    ccl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    // idempotent
    ccl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
}

#[test]
fn test_worker_add_and_list() {
    let db_path = setup_test_db("cli_worker");

    ccl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ccl()
        .args([
            "--db", &db_path, "worker", "add", "--name", "Ana Torres", "--position", "Picker",
        ])
        .assert()
        .success()
        .stdout(contains("registered with id 1"));

    ccl()
        .args(["--db", &db_path, "worker", "list"])
        .assert()
        .success()
        .stdout(contains("Ana Torres").and(contains("Picker")));
}

#[test]
fn test_order_lifecycle() {
    let db_path = setup_test_db("cli_order");

    ccl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ccl()
        .args(["--db", &db_path, "order", "add", "--title", "Tomato Harvesting"])
        .assert()
        .success();

    ccl()
        .args(["--db", &db_path, "order", "status", "1", "--set", "in-progress"])
        .assert()
        .success()
        .stdout(contains("in-progress"));

    ccl()
        .args(["--db", &db_path, "order", "list"])
        .assert()
        .success()
        .stdout(contains("Tomato Harvesting").and(contains("in-progress")));
}

#[test]
fn test_order_status_rejects_unknown_value() {
    let db_path = setup_test_db("cli_order_bad_status");

    ccl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ccl()
        .args(["--db", &db_path, "order", "add", "--title", "Pruning"])
        .assert()
        .success();

    ccl()
        .args(["--db", &db_path, "order", "status", "1", "--set", "done"])
        .assert()
        .failure()
        .stderr(contains("Invalid work order status"));
}

#[test]
fn test_clock_in_out_roundtrip() {
    let db_path = setup_test_db("cli_clock");
    init_db_with_data(&db_path);

    // init_db_with_data already closed the session; a fresh pair on Tuesday
    ccl()
        .args([
            "--db",
            &db_path,
            "clock",
            "in",
            "--worker",
            "1",
            "--at",
            "2025-06-03 07:00",
        ])
        .assert()
        .success()
        .stdout(contains("clocked in at 2025-06-03 07:00"));

    ccl()
        .args([
            "--db",
            &db_path,
            "clock",
            "out",
            "--worker",
            "1",
            "--at",
            "2025-06-03 15:00",
        ])
        .assert()
        .success()
        .stdout(contains("08h 00m"));
}

#[test]
fn test_double_clock_in_is_rejected() {
    let db_path = setup_test_db("cli_double_in");
    init_db_with_data(&db_path);

    ccl()
        .args([
            "--db",
            &db_path,
            "clock",
            "in",
            "--worker",
            "1",
            "--at",
            "2025-06-03 07:00",
        ])
        .assert()
        .success();

    ccl()
        .args([
            "--db",
            &db_path,
            "clock",
            "in",
            "--worker",
            "1",
            "--at",
            "2025-06-03 09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("already has an open session"));
}

#[test]
fn test_clock_out_without_session_fails() {
    let db_path = setup_test_db("cli_out_no_session");
    init_db_with_data(&db_path);

    ccl()
        .args([
            "--db",
            &db_path,
            "clock",
            "out",
            "--worker",
            "1",
            "--at",
            "2025-06-03 15:00",
        ])
        .assert()
        .failure()
        .stderr(contains("no open session"));
}

#[test]
fn test_summary_reports_attributed_hours() {
    let db_path = setup_test_db("cli_summary");
    init_db_with_data(&db_path);

    ccl()
        .args(["--db", &db_path, "summary", "1", "--date", "2025-06-02"])
        .assert()
        .success()
        .stdout(
            contains("Tomato Harvesting")
                .and(contains("08h 30m"))
                .and(contains("Ana Torres")),
        );
}

#[test]
fn test_report_covers_all_workers() {
    let db_path = setup_test_db("cli_report");
    init_db_with_data(&db_path);

    ccl()
        .args([
            "--db", &db_path, "worker", "add", "--name", "Bruno Keller", "--position", "Foreman",
        ])
        .assert()
        .success();

    ccl()
        .args(["--db", &db_path, "report", "--date", "2025-06-02"])
        .assert()
        .success()
        .stdout(contains("Ana Torres").and(contains("Bruno Keller")));
}

#[test]
fn test_repair_on_clean_db_is_a_noop() {
    let db_path = setup_test_db("cli_repair_clean");
    init_db_with_data(&db_path);

    ccl()
        .args(["--db", &db_path, "repair"])
        .assert()
        .success()
        .stdout(contains("0 fixed, 0 flagged"));
}

#[test]
fn test_repair_closes_forgotten_session() {
    let db_path = setup_test_db("cli_repair_stale");
    init_db_with_data(&db_path);

    // a session opened in 2025 is long past the shift bound by now
    ccl()
        .args([
            "--db",
            &db_path,
            "clock",
            "in",
            "--worker",
            "1",
            "--at",
            "2025-06-03 08:00",
        ])
        .assert()
        .success();

    ccl()
        .args(["--db", &db_path, "repair"])
        .assert()
        .success()
        .stdout(contains("1 fixed").and(contains("closed at 2025-06-04 00:00")));

    // second run has nothing left to do
    ccl()
        .args(["--db", &db_path, "repair"])
        .assert()
        .success()
        .stdout(contains("0 fixed, 0 flagged"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("cli_db_info");
    init_db_with_data(&db_path);

    ccl()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Workers:").and(contains("Entries:")));

    ccl()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("integrity: ok"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_data(&db_path);

    ccl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("clock-in").and(contains("clock-out")));
}
