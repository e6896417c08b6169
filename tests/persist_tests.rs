use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{rmu, setup_roster};

#[test]
fn test_roster_round_trip_across_runs() {
    let roster = setup_roster("round_trip");

    rmu()
        .args([
            "--roster",
            &roster,
            "add",
            "Grace Hopper",
            "--pos",
            "A",
            "--offset",
            "2.5h",
            "--status",
            "T",
        ])
        .assert()
        .success();

    // Fresh process, same file: every field survives
    rmu()
        .args(["--roster", &roster, "list"])
        .assert()
        .success()
        .stdout(contains("Grace Hopper"))
        .stdout(contains("Administrator"))
        .stdout(contains("2.5h"))
        .stdout(contains("Travel"));
}

#[test]
fn test_corrupt_file_fails_loudly_and_is_preserved() {
    let roster = setup_roster("corrupt_preserved");
    fs::write(&roster, "{not json").expect("write corrupt file");

    rmu()
        .args(["--roster", &roster, "list"])
        .assert()
        .failure()
        .stderr(contains("Corrupt roster file"));

    // Mutations refuse too, and never repair or truncate the file
    rmu()
        .args(["--roster", &roster, "add", "Ann"])
        .assert()
        .failure()
        .stderr(contains("Corrupt roster file"));

    let content = fs::read_to_string(&roster).expect("read roster");
    assert_eq!(content, "{not json");
}

#[test]
fn test_unknown_enum_label_is_corrupt() {
    let roster = setup_roster("bad_label");

    let json = r#"{
  "shift_start": null,
  "people": [
    {
      "full_name": "Hal Nine",
      "position": "Astronaut",
      "expected": "1h",
      "status": "Present",
      "arrival": null
    }
  ]
}"#;
    fs::write(&roster, json).expect("write roster");

    rmu()
        .args(["--roster", &roster, "list"])
        .assert()
        .failure()
        .stderr(contains("Corrupt roster file"));
}

#[test]
fn test_missing_file_lists_empty_and_is_not_created() {
    let roster = setup_roster("missing_file");

    rmu()
        .args(["--roster", &roster, "list"])
        .assert()
        .success()
        .stdout(contains("Roster is empty."));

    assert!(!Path::new(&roster).exists());
}

#[test]
fn test_save_leaves_no_temp_file_behind() {
    let roster = setup_roster("atomic_save");

    rmu()
        .args(["--roster", &roster, "add", "Bob Ross"])
        .assert()
        .success();

    let tmp = roster.replace(".json", ".tmp");
    assert!(Path::new(&roster).exists());
    assert!(!Path::new(&tmp).exists());
}
