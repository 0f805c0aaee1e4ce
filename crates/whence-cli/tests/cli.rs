//! End-to-end tests for the `whence` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn whence() -> Command {
    Command::cargo_bin("whence").unwrap()
}

#[test]
fn test_resolves_phrase_against_explicit_reference() {
    whence()
        .args(["--at", "2024-01-15T12:00:00Z", "10 hours ago"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "10 hours ago was Monday, January 15th 2024, 2:00:00 AM",
        ));
}

#[test]
fn test_resolves_future_days() {
    whence()
        .args(["--at", "2024-01-15T12:00:00Z", "2 days in the future"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2 days in the future was Wednesday, January 17th 2024, 12:00:00 PM",
        ));
}

#[test]
fn test_invalid_input_prints_fixed_string_and_exits_zero() {
    whence()
        .args(["--at", "2024-01-15T12:00:00Z", "garbage text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input. Please try again."));
}

#[test]
fn test_json_output_carries_phrase_and_resolved_instant() {
    whence()
        .args(["--json", "--at", "2024-01-15T12:00:00Z", "2 days in the future"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"magnitude\": 2"))
        .stdout(predicate::str::contains("2024-01-17T12:00:00+00:00"))
        .stdout(predicate::str::contains(
            "2 days in the future was Wednesday, January 17th 2024, 12:00:00 PM",
        ));
}

#[test]
fn test_json_output_for_invalid_input() {
    whence()
        .args(["--json", "--at", "2024-01-15T12:00:00Z", "banana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input. Please try again."));
}

#[test]
fn test_no_phrase_prints_example_invocations() {
    whence()
        .assert()
        .success()
        .stdout(predicate::str::contains("10 hours ago was "))
        .stdout(predicate::str::contains("2 days in the future was "));
}

#[test]
fn test_rejects_malformed_reference_instant() {
    whence()
        .args(["--at", "not-a-datetime", "10 hours ago"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --at instant"));
}
