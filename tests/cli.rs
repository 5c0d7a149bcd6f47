#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn cli() -> Command {
    Command::cargo_bin("roulement-cli").unwrap()
}

#[test]
fn list_keeps_registration_order() {
    let dir = tempdir().unwrap();
    let csv = dir.path().join("team.csv");
    fs::write(&csv, "name,pref1,pref2,pref3\nZed,evening,morning,afternoon\n").unwrap();

    cli()
        .args(["list", "--employees"])
        .arg(&csv)
        .args(["--employee", "Amy=morning,afternoon,evening"])
        .assert()
        .success()
        .stdout("Zed: [Evening, Morning, Afternoon]\nAmy: [Morning, Afternoon, Evening]\n");
}

#[test]
fn generate_prints_grid_and_exports() {
    let dir = tempdir().unwrap();
    let json = dir.path().join("week.json");
    let csv = dir.path().join("week.csv");

    cli()
        .args(["generate", "--employee", "Alice=morning,afternoon,evening"])
        .args(["--employee", "Bob=morning,evening,afternoon"])
        .arg("--out-json")
        .arg(&json)
        .arg("--out-csv")
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Monday: Morning: Alice, Bob | Afternoon: None | Evening: None\n",
        ));

    assert!(json.exists());
    assert!(fs::read_to_string(&csv).unwrap().contains("Friday,Morning,Alice;Bob"));
}

#[test]
fn invalid_employee_flag_fails() {
    cli()
        .args(["list", "--employee", "Alice=morning,morning,evening"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("distinct"));
}

#[test]
fn check_flags_incomplete_week_with_code_2() {
    let dir = tempdir().unwrap();
    let report = dir.path().join("report.csv");

    cli()
        .args(["check", "--employee", "Alice=morning,afternoon,evening"])
        .arg("--report")
        .arg(&report)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("at least 9 needed"));

    let raw = fs::read_to_string(&report).unwrap();
    assert!(raw.starts_with("kind,day,shift,employee,count\n"));
}

#[test]
fn check_accepts_exported_schedule() {
    let dir = tempdir().unwrap();
    let json = dir.path().join("week.json");

    cli()
        .args(["generate", "--employee", "Alice=morning,afternoon,evening"])
        .arg("--out-json")
        .arg(&json)
        .assert()
        .success();

    cli()
        .args(["check", "--capacity", "1", "--weekly-cap", "5", "--schedule"])
        .arg(&json)
        .args(["--employee", "Alice=morning,afternoon,evening"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("gap: Saturday Morning (1 missing)"));
}

#[test]
fn check_flags_an_empty_exported_schedule() {
    let dir = tempdir().unwrap();
    let json = dir.path().join("week.json");
    fs::write(&json, r#"{"schedule": {}}"#).unwrap();

    cli()
        .args(["check", "--schedule"])
        .arg(&json)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("OK").not())
        .stderr(predicate::str::contains("Found 0 violation(s), 42 missing seat(s)"));
}

#[test]
fn zero_capacity_or_cap_is_rejected() {
    cli().args(["check", "--capacity", "0"]).assert().failure();
    cli().args(["check", "--weekly-cap", "0"]).assert().failure();
}

#[test]
fn roster_json_feeds_a_later_run() {
    let dir = tempdir().unwrap();
    let roster = dir.path().join("roster.json");

    cli()
        .args(["list", "--employee", "Alice=evening,morning,afternoon"])
        .arg("--out-json")
        .arg(&roster)
        .assert()
        .success();

    cli()
        .args(["generate", "--day", "tuesday", "--roster-json"])
        .arg(&roster)
        .assert()
        .success()
        .stdout("Tuesday: Morning: None | Afternoon: None | Evening: Alice\n");
}

#[test]
fn unknown_day_is_rejected() {
    cli()
        .args(["generate", "--day", "someday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown day"));
}
