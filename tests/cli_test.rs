use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn get_priority1_prints_management_json() {
    let mut cmd = Command::cargo_bin("pmc-rs").unwrap();
    cmd.arg("PRIORITY1")
        .assert()
        .success()
        .stdout(contains("\"managementId\": \"PRIORITY1\""))
        .stdout(contains("\"actionField\": \"GET\""));
}

#[test]
fn unrecognized_management_id_fails() {
    let mut cmd = Command::cargo_bin("pmc-rs").unwrap();
    cmd.arg("NOT_A_REAL_ID").assert().failure().stderr(contains("unrecognized managementId"));
}

#[test]
fn no_positional_argument_fails() {
    let mut cmd = Command::cargo_bin("pmc-rs").unwrap();
    cmd.assert().failure().stderr(contains("expected a managementId"));
}

#[test]
fn help_flag_prints_usage() {
    let mut cmd = Command::cargo_bin("pmc-rs").unwrap();
    cmd.arg("-h").assert().success().stdout(contains("Usage"));
}

#[test]
fn version_flag_prints_message() {
    let mut cmd = Command::cargo_bin("pmc-rs").unwrap();
    cmd.arg("-v").assert().success().stdout(contains("pmc-rs version"));
}

#[test]
fn conflicting_transport_flags_fail() {
    let mut cmd = Command::cargo_bin("pmc-rs").unwrap();
    cmd.args(["-4", "-6", "PRIORITY1"]).assert().failure();
}

#[test]
fn domain_number_flag_is_accepted() {
    let mut cmd = Command::cargo_bin("pmc-rs").unwrap();
    cmd.args(["-d", "5", "DOMAIN"])
        .assert()
        .success()
        .stdout(contains("\"domainNumber\": 5"));
}
