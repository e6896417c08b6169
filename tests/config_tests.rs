use predicates::str::contains;
use std::env;
use std::fs;
use std::path::PathBuf;

mod common;
use common::rmu;

/// Fake home dir so init never touches the real user configuration
fn setup_fake_home(name: &str) -> PathBuf {
    let mut home = env::temp_dir();
    home.push(format!("{}_rmuster_home", name));
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(&home).expect("create fake home");
    home
}

fn config_dir(home: &PathBuf) -> PathBuf {
    if cfg!(target_os = "windows") {
        home.join("rmuster")
    } else {
        home.join(".rmuster")
    }
}

#[test]
fn test_init_creates_config_and_empty_roster() {
    let home = setup_fake_home("init_creates");
    let home_s = home.to_string_lossy().to_string();

    rmu()
        .env("HOME", &home_s)
        .env("APPDATA", &home_s)
        .args(["init"])
        .assert()
        .success()
        .stdout(contains("rMuster initialization completed!"));

    let dir = config_dir(&home);
    assert!(dir.join("rmuster.conf").exists());

    let snapshot = fs::read_to_string(dir.join("roster.json")).expect("read roster");
    assert!(snapshot.contains("\"people\": []"));
}

#[test]
fn test_init_with_custom_roster_name() {
    let home = setup_fake_home("init_custom");
    let home_s = home.to_string_lossy().to_string();

    rmu()
        .env("HOME", &home_s)
        .env("APPDATA", &home_s)
        .args(["--roster", "crew.json", "init"])
        .assert()
        .success()
        .stdout(contains("crew.json"));

    assert!(config_dir(&home).join("crew.json").exists());
}

#[test]
fn test_init_keeps_existing_roster() {
    let home = setup_fake_home("init_keeps");
    let home_s = home.to_string_lossy().to_string();

    rmu()
        .env("HOME", &home_s)
        .env("APPDATA", &home_s)
        .args(["init"])
        .assert()
        .success();

    let roster = config_dir(&home).join("roster.json");
    let roster_s = roster.to_string_lossy().to_string();

    rmu()
        .env("HOME", &home_s)
        .env("APPDATA", &home_s)
        .args(["--roster", &roster_s, "add", "Bob Ross"])
        .assert()
        .success();

    // Running init again must not wipe the populated roster
    rmu()
        .env("HOME", &home_s)
        .env("APPDATA", &home_s)
        .args(["init"])
        .assert()
        .success();

    let snapshot = fs::read_to_string(&roster).expect("read roster");
    assert!(snapshot.contains("Bob Ross"));
}

#[test]
fn test_config_print_shows_defaults() {
    let home = setup_fake_home("config_print");
    let home_s = home.to_string_lossy().to_string();

    rmu()
        .env("HOME", &home_s)
        .env("APPDATA", &home_s)
        .args(["init"])
        .assert()
        .success();

    rmu()
        .env("HOME", &home_s)
        .env("APPDATA", &home_s)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("Current configuration"))
        .stdout(contains("export_format: xlsx"))
        .stdout(contains("default_offset: 1h"));
}
