#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Fixed shift start used by most timing tests (RFC 3339, UTC).
pub const SHIFT_START: &str = "2026-03-02T09:00:00+00:00";

pub fn rmu() -> Command {
    cargo_bin_cmd!("rmuster")
}

/// Create a unique roster path inside the system temp dir and remove any existing file
pub fn setup_roster(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rmuster.json", name));
    let roster_path = path.to_string_lossy().to_string();
    fs::remove_file(&roster_path).ok();
    roster_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Add a small crew useful for many tests. Sorted order after seeding:
/// 1. ann lee, 2. Bob Ross, 3. Carl Sagan
pub fn seed_people(roster_path: &str) {
    rmu()
        .args(["--roster", roster_path, "add", "Bob Ross", "--pos", "E"])
        .assert()
        .success();

    rmu()
        .args(["--roster", roster_path, "add", "ann lee", "--pos", "M"])
        .assert()
        .success();

    rmu()
        .args(["--roster", roster_path, "add", "Carl Sagan", "--pos", "T"])
        .assert()
        .success();
}

/// Start the shift timer at the fixed instant
pub fn start_shift(roster_path: &str) {
    rmu()
        .args(["--roster", roster_path, "--at", SHIFT_START, "start"])
        .assert()
        .success();
}
