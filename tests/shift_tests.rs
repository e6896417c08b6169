use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{SHIFT_START, rmu, seed_people, setup_roster, start_shift, temp_out};

#[test]
fn test_start_and_restart() {
    let roster = setup_roster("start_restart");
    seed_people(&roster);

    rmu()
        .args(["--roster", &roster, "--at", SHIFT_START, "start"])
        .assert()
        .success()
        .stdout(contains("Shift started at"));

    rmu()
        .args([
            "--roster",
            &roster,
            "--at",
            "2026-03-02T10:00:00+00:00",
            "start",
        ])
        .assert()
        .success()
        .stdout(contains("Shift restarted at"))
        .stdout(contains("(was "));
}

#[test]
fn test_arrivals_on_time_and_late() {
    let roster = setup_roster("on_time_and_late");

    rmu()
        .args(["--roster", &roster, "add", "Bob Ross", "--offset", "1.5h"])
        .assert()
        .success();
    rmu()
        .args(["--roster", &roster, "add", "ann lee", "--offset", "1.5h"])
        .assert()
        .success();

    start_shift(&roster);

    // 1.5h offset on a 09:00 start: the deadline is 10:30
    rmu()
        .args([
            "--roster",
            &roster,
            "--at",
            "2026-03-02T09:20:00+00:00",
            "arrive",
            "Bob Ross",
        ])
        .assert()
        .success()
        .stdout(contains("(on time)"));

    rmu()
        .args([
            "--roster",
            &roster,
            "--at",
            "2026-03-02T10:45:00+00:00",
            "arrive",
            "ann lee",
        ])
        .assert()
        .success()
        .stdout(contains("(00:15 late)"));

    // Lateness column: green zero for Bob, red 00:15 for ann
    rmu()
        .args(["--roster", &roster, "list"])
        .assert()
        .success()
        .stdout(contains("\x1b[32m00:00"))
        .stdout(contains("\x1b[31m00:15"));
}

#[test]
fn test_arrive_is_recorded_once() {
    let roster = setup_roster("arrive_once");

    rmu()
        .args(["--roster", &roster, "add", "Bob Ross"])
        .assert()
        .success();
    start_shift(&roster);

    rmu()
        .args([
            "--roster",
            &roster,
            "--at",
            "2026-03-02T09:10:00+00:00",
            "arrive",
            "1",
        ])
        .assert()
        .success()
        .stdout(contains("(on time)"));

    let before = fs::read(&roster).expect("read roster");

    rmu()
        .args([
            "--roster",
            &roster,
            "--at",
            "2026-03-02T11:00:00+00:00",
            "arrive",
            "1",
        ])
        .assert()
        .success()
        .stdout(contains("'Bob Ross' already has an arrival recorded."));

    let after = fs::read(&roster).expect("read roster");
    assert_eq!(before, after);
}

#[test]
fn test_arrive_before_start_warns() {
    let roster = setup_roster("arrive_before_start");
    seed_people(&roster);

    let before = fs::read(&roster).expect("read roster");

    rmu()
        .args([
            "--roster",
            &roster,
            "--at",
            "2026-03-02T09:10:00+00:00",
            "arrive",
            "1",
        ])
        .assert()
        .success()
        .stdout(contains(
            "Shift has not been started yet. Run 'rmuster start' first.",
        ));

    let after = fs::read(&roster).expect("read roster");
    assert_eq!(before, after);
}

#[test]
fn test_arrive_not_present_warns() {
    let roster = setup_roster("arrive_not_present");
    seed_people(&roster);

    rmu()
        .args(["--roster", &roster, "edit", "ann lee", "--status", "S"])
        .assert()
        .success();
    start_shift(&roster);

    let before = fs::read(&roster).expect("read roster");

    rmu()
        .args([
            "--roster",
            &roster,
            "--at",
            "2026-03-02T09:10:00+00:00",
            "arrive",
            "ann lee",
        ])
        .assert()
        .success()
        .stdout(contains("'ann lee' is not marked Present."));

    let after = fs::read(&roster).expect("read roster");
    assert_eq!(before, after);
}

#[test]
fn test_status_change_preserves_arrival() {
    let roster = setup_roster("status_keeps_arrival");

    rmu()
        .args(["--roster", &roster, "add", "Bob Ross"])
        .assert()
        .success();
    start_shift(&roster);

    rmu()
        .args([
            "--roster",
            &roster,
            "--at",
            "2026-03-02T09:30:00+00:00",
            "arrive",
            "1",
        ])
        .assert()
        .success();

    rmu()
        .args(["--roster", &roster, "edit", "1", "--status", "T"])
        .assert()
        .success();

    let content = fs::read_to_string(&roster).expect("read roster");
    assert!(content.contains("\"status\": \"Travel\""));
    assert!(!content.contains("\"arrival\": null"));
}

#[test]
fn test_reset_clears_shift_data() {
    let roster = setup_roster("reset_clears");
    seed_people(&roster);
    start_shift(&roster);

    rmu()
        .args([
            "--roster",
            &roster,
            "--at",
            "2026-03-02T09:10:00+00:00",
            "arrive",
            "Bob Ross",
        ])
        .assert()
        .success();
    rmu()
        .args(["--roster", &roster, "edit", "ann lee", "--status", "S"])
        .assert()
        .success();

    rmu()
        .args(["--roster", &roster, "reset"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Shift data cleared."));

    let content = fs::read_to_string(&roster).expect("read roster");
    assert!(content.contains("\"shift_start\": null"));
    assert!(!content.contains("\"Sick\""));
    assert_eq!(content.matches("\"arrival\": null").count(), 3);
    // Identity fields survive the reset
    assert!(content.contains("\"position\": \"Engineer\""));
    assert!(content.contains("\"position\": \"Manager\""));

    rmu()
        .args(["--roster", &roster, "list"])
        .assert()
        .success()
        .stdout(contains("Shift not started."))
        .stdout(contains("ann lee"));
}

#[test]
fn test_reset_cancelled_keeps_data() {
    let roster = setup_roster("reset_cancelled");
    seed_people(&roster);
    start_shift(&roster);

    let before = fs::read(&roster).expect("read roster");

    rmu()
        .args(["--roster", &roster, "reset"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    let after = fs::read(&roster).expect("read roster");
    assert_eq!(before, after);
}

#[test]
fn test_restart_rebases_lateness() {
    let roster = setup_roster("restart_rebases");

    rmu()
        .args(["--roster", &roster, "add", "Bob Ross"])
        .assert()
        .success();
    start_shift(&roster);

    rmu()
        .args([
            "--roster",
            &roster,
            "--at",
            "2026-03-02T10:45:00+00:00",
            "arrive",
            "1",
        ])
        .assert()
        .success()
        .stdout(contains("(00:45 late)"));

    // Restart an hour later: the same arrival now falls inside the window
    rmu()
        .args([
            "--roster",
            &roster,
            "--at",
            "2026-03-02T10:00:00+00:00",
            "start",
        ])
        .assert()
        .success()
        .stdout(contains("Shift restarted at"));

    rmu()
        .args(["--roster", &roster, "list"])
        .assert()
        .success()
        .stdout(contains("\x1b[32m00:00"))
        .stdout(contains("\x1b[31m").not());
}

#[test]
fn test_arrival_percent_math() {
    let roster = setup_roster("percent_math");

    let csv_path = temp_out("percent_math", "csv");
    fs::write(&csv_path, "Ada\nBen\nCleo\nDrew\nEve\nFay\nGus\n").expect("write csv");
    rmu()
        .args(["--roster", &roster, "import", "--file", &csv_path])
        .assert()
        .success()
        .stdout(contains("Imported 7 names."));

    start_shift(&roster);

    for (name, at) in [
        ("Ada", "2026-03-02T09:05:00+00:00"),
        ("Ben", "2026-03-02T09:06:00+00:00"),
        ("Cleo", "2026-03-02T09:07:00+00:00"),
        ("Drew", "2026-03-02T09:08:00+00:00"),
        ("Eve", "2026-03-02T09:09:00+00:00"),
    ] {
        rmu()
            .args(["--roster", &roster, "--at", at, "arrive", name])
            .assert()
            .success();
    }

    rmu()
        .args(["--roster", &roster, "list"])
        .assert()
        .success()
        .stdout(contains("Arrived: 5 of 7 present (71.4%)"));
}

#[test]
fn test_arrival_percent_zero_when_nobody_present() {
    let roster = setup_roster("percent_zero");

    rmu()
        .args(["--roster", &roster, "add", "Bob Ross"])
        .assert()
        .success();
    rmu()
        .args(["--roster", &roster, "add", "ann lee"])
        .assert()
        .success();
    rmu()
        .args(["--roster", &roster, "edit", "1", "--status", "S"])
        .assert()
        .success();
    rmu()
        .args(["--roster", &roster, "edit", "2", "--status", "S"])
        .assert()
        .success();

    rmu()
        .args(["--roster", &roster, "list"])
        .assert()
        .success()
        .stdout(contains("Sick:    2 (100.0%)"))
        .stdout(contains("Arrived: 0 of 0 present (0.0%)"));
}
