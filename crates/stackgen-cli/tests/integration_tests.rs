//! Integration tests for stackgen-cli.
//!
//! These exercise the binary end to end but never reach the external tools:
//! every case either stops at planning/validation or fails before the first
//! subprocess would run.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn stackgen() -> Command {
    Command::cargo_bin("stackgen").unwrap()
}

#[test]
fn help_flag() {
    stackgen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Full-stack project scaffolding"))
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("plan"));
}

#[test]
fn version_flag() {
    stackgen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_shows_help() {
    stackgen().assert().failure().code(1);
}

#[test]
fn plan_prints_every_group() {
    stackgen()
        .args(["plan", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan for 'demo'"))
        .stdout(predicate::str::contains("demo/backend/"))
        .stdout(predicate::str::contains("demo/frontend/"))
        .stdout(predicate::str::contains("pnpm init"))
        .stdout(predicate::str::contains("create-next-app"))
        .stdout(predicate::str::contains("demo/docker-compose.yml"))
        .stdout(predicate::str::contains("demo/.env.example"))
        .stdout(predicate::str::contains("git commit"));
}

#[test]
fn plan_skip_install_drops_tool_commands() {
    stackgen()
        .args(["plan", "demo", "--skip-install", "--no-git"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pnpm").not())
        .stdout(predicate::str::contains("git ").not())
        .stdout(predicate::str::contains("demo/backend/package.json"));
}

#[test]
fn dry_run_creates_nothing() {
    let temp = TempDir::new().unwrap();

    stackgen()
        .current_dir(temp.path())
        .args(["new", "test-project", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!temp.path().join("test-project").exists());
}

#[test]
fn invalid_name_is_a_user_error() {
    let temp = TempDir::new().unwrap();

    stackgen()
        .current_dir(temp.path())
        .args(["new", ".hidden", "--yes"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid project name"));

    stackgen()
        .current_dir(temp.path())
        .args(["new", "a/b", "--yes"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn missing_name_is_a_usage_error() {
    stackgen().arg("new").assert().failure().code(1);
}

#[test]
fn extra_positional_is_a_usage_error() {
    let temp = TempDir::new().unwrap();

    stackgen()
        .current_dir(temp.path())
        .args(["new", "first", "second"])
        .assert()
        .failure()
        .code(1);

    assert!(!temp.path().join("first").exists());
    assert!(!temp.path().join("second").exists());
}

#[test]
fn existing_directory_is_refused() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("existing-project")).unwrap();

    stackgen()
        .current_dir(temp.path())
        .args(["new", "existing-project", "--yes"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn missing_config_file_is_a_config_error() {
    stackgen()
        .args(["--config", "/definitely/not/here.toml", "plan", "demo"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn config_file_defaults_feed_the_plan() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("stackgen.toml");
    fs::write(&config, "[defaults]\nskip_install = true\nno_git = true\n").unwrap();

    // Dry run uses the same option merge as a real run.
    stackgen()
        .current_dir(temp.path())
        .args(["--config"])
        .arg(&config)
        .args(["new", "demo", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pnpm").not())
        .stdout(predicate::str::contains("demo/backend/package.json"));
}

#[test]
fn completions_generate_for_bash() {
    stackgen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stackgen"));
}
