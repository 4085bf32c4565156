use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn roll_is_deterministic_for_a_seed() {
    let out = |seed: &str| {
        let mut cmd = Command::cargo_bin("cli").unwrap();
        let assert = cmd.args(["roll", "--seed", seed, "--rolls", "3"]).assert().success();
        String::from_utf8(assert.get_output().stdout.clone()).unwrap()
    };
    assert_eq!(out("7"), out("7"));
    assert!(out("7").contains("roll 1:"));
}

#[test]
fn fight_reports_a_winner_line() {
    let mut cmd = Command::cargo_bin("cli").unwrap();
    cmd.args(["fight", "--entity-id", "1", "--seed", "11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("winner="));
}

#[test]
fn fight_json_is_parseable() {
    let mut cmd = Command::cargo_bin("cli").unwrap();
    let assert = cmd
        .args(["fight", "--entity-id", "1", "--seed", "11", "--json"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(report.get("winner").is_some());
    assert!(report.get("rounds").is_some());
}

#[test]
fn fight_with_unknown_entity_fails() {
    let mut cmd = Command::cargo_bin("cli").unwrap();
    cmd.args(["fight", "--entity-id", "9999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("9999"));
}

#[test]
fn plan_is_deterministic_for_a_context() {
    let out = || {
        let mut cmd = Command::cargo_bin("cli").unwrap();
        let assert = cmd
            .args(["plan", "--location-id", "1", "--level", "2", "--turn", "5", "--json"])
            .assert()
            .success();
        String::from_utf8(assert.get_output().stdout.clone()).unwrap()
    };
    assert_eq!(out(), out());
}

#[test]
fn plan_text_output_names_a_definition() {
    let mut cmd = Command::cargo_bin("cli").unwrap();
    cmd.args(["plan", "--location-id", "1", "--level", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("definition:"));
}
