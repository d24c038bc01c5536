//! Tests for error handling and suggestions.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn stackgen() -> Command {
    Command::cargo_bin("stackgen").unwrap()
}

#[test]
fn invalid_name_error_carries_suggestions() {
    stackgen()
        .args(["new", ".hidden", "--yes", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid project name"))
        .stderr(predicate::str::contains("Suggestions:"))
        .stderr(predicate::str::contains("alphanumeric"));
}

#[test]
fn existing_target_error_suggests_alternatives() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("taken")).unwrap();

    stackgen()
        .current_dir(temp.path())
        .args(["new", "taken", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Suggestions:"))
        .stderr(predicate::str::contains("different project name"));
}

#[test]
fn non_verbose_error_hints_at_verbose() {
    stackgen()
        .args(["plan", ".."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--verbose"));
}
