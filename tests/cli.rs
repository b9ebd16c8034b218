#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli() -> Command {
    let mut cmd = Command::cargo_bin("cinq-huit-cli").unwrap();
    cmd.env_remove("CINQ_HUIT_REFERENCE_DATE")
        .env_remove("CINQ_HUIT_REFERENCE_TEAM");
    cmd
}

#[test]
fn prints_shift_code() {
    cli()
        .args(["code", "--team", "1", "--date", "2025-01-10"])
        .assert()
        .success()
        .stdout("2502.4N\n");
}

#[test]
fn prints_date_code() {
    cli()
        .args(["date-code", "--date", "2025-01-15"])
        .assert()
        .success()
        .stdout("2503.3\n");
}

#[test]
fn shift_honours_environment_reference_team() {
    cli()
        .env("CINQ_HUIT_REFERENCE_TEAM", "2")
        .args(["shift", "--team", "2", "--date", "2025-01-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Morning"));
}

#[test]
fn garbage_environment_falls_back_to_defaults() {
    cli()
        .env("CINQ_HUIT_REFERENCE_TEAM", "42")
        .env("CINQ_HUIT_REFERENCE_DATE", "not-a-date")
        .args(["shift", "--team", "1", "--date", "2025-01-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Morning"));
}

#[test]
fn transfers_until_single_day() {
    cli()
        .args([
            "transfers", "--team", "1", "--with", "2", "--from", "2025-01-09", "--until",
            "2025-01-09",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("takeover"))
        .stdout(predicate::str::contains("[2502.4E]"));
}

#[test]
fn next_shift_after_rest() {
    cli()
        .args(["next", "--team", "1", "--date", "2025-01-12"])
        .assert()
        .success()
        .stdout("Morning on 2025-01-16 [2503.4M]\n");
}

#[test]
fn rejects_unknown_team() {
    cli()
        .args(["shift", "--team", "9", "--date", "2025-01-06"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid team 9"));
}

#[test]
fn config_file_overrides_reference() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.json");
    fs::write(&path, r#"{ "reference_date": "2025-01-08", "reference_team": 1 }"#).unwrap();
    cli()
        .args(["--config", path.to_str().unwrap()])
        .args(["shift", "--team", "1", "--date", "2025-01-08"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Morning"));
}

#[test]
fn export_writes_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    cli()
        .args([
            "export", "--team", "3", "--from", "2025-01-06", "--to", "2025-01-12", "--csv",
            path.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout("exported 7 day(s) for team 3\n");
    let data = fs::read_to_string(&path).unwrap();
    assert_eq!(data.lines().count(), 8);
}

#[test]
fn invalid_config_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("roster.json");
    fs::write(&path, r#"{ "reference_team": 9 }"#).unwrap();
    cli()
        .args(["--config", path.to_str().unwrap()])
        .args(["shift", "--team", "1", "--date", "2025-01-08"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

#[test]
fn week_filtered_on_one_shift() {
    cli()
        .args(["week", "--team", "1", "--date", "2025-01-06", "--only", "e"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2502.3E"))
        .stdout(predicate::str::contains("2502.4E"))
        .stdout(predicate::str::contains("2502.1M").not());
}

#[test]
fn week_rejects_off_as_filter() {
    cli()
        .args(["week", "--team", "1", "--only", "O"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown shift letter"));
}

#[test]
fn days_and_until_are_exclusive() {
    cli()
        .args([
            "transfers", "--team", "1", "--with", "2", "--days", "3", "--until", "2025-01-09",
        ])
        .assert()
        .failure();
}
