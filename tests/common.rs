#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ccl() -> Command {
    cargo_bin_cmd!("crewclock")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_crewclock.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and seed one worker, one work order, an assignment and a
/// closed 08:00–16:30 session on 2025-06-02 (a Monday).
pub fn init_db_with_data(db_path: &str) {
    ccl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    ccl()
        .args([
            "--db", db_path, "worker", "add", "--name", "Ana Torres", "--position", "Picker",
        ])
        .assert()
        .success();

    ccl()
        .args(["--db", db_path, "order", "add", "--title", "Tomato Harvesting"])
        .assert()
        .success();

    ccl()
        .args([
            "--db",
            db_path,
            "order",
            "assign",
            "--worker",
            "1",
            "--order",
            "1",
            "--at",
            "2025-06-01 06:00",
        ])
        .assert()
        .success();

    ccl()
        .args([
            "--db",
            db_path,
            "clock",
            "in",
            "--worker",
            "1",
            "--at",
            "2025-06-02 08:00",
        ])
        .assert()
        .success();

    ccl()
        .args([
            "--db",
            db_path,
            "clock",
            "out",
            "--worker",
            "1",
            "--at",
            "2025-06-02 16:30",
        ])
        .assert()
        .success();
}
