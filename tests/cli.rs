// ABOUTME: Integration tests for the rollout CLI commands.
// ABOUTME: Validates --help output, argument errors, and init command behavior.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn rollout_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("rollout"))
}

#[test]
fn help_shows_commands() {
    rollout_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("deploy"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn deploy_requires_a_service_argument() {
    rollout_cmd()
        .arg("deploy")
        .assert()
        .failure()
        .stderr(predicate::str::contains("SERVICE"));
}

#[test]
fn deploy_rejects_an_invalid_service_name() {
    // Name validation runs before config discovery, so no config is needed.
    let temp_dir = tempfile::tempdir().unwrap();

    rollout_cmd()
        .current_dir(temp_dir.path())
        .args(["deploy", "Bad_Name"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid service name"));
}

#[test]
fn deploy_without_config_reports_discovery_failure() {
    let temp_dir = tempfile::tempdir().unwrap();

    rollout_cmd()
        .current_dir(temp_dir.path())
        .args(["deploy", "myapp"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration file not found"));
}

#[test]
fn init_creates_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("rollout.yml");

    rollout_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success();

    assert!(config_path.exists(), "rollout.yml should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(
        content.contains("platform:"),
        "Config should have platform section"
    );
}

#[test]
fn init_refuses_to_overwrite_existing_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("rollout.yml");

    fs::write(&config_path, "existing: config").unwrap();

    rollout_cmd()
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_force_overwrites_existing_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("rollout.yml");

    fs::write(&config_path, "existing: config").unwrap();

    rollout_cmd()
        .current_dir(temp_dir.path())
        .args(["init", "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("platform:"));
}

#[test]
fn init_writes_custom_endpoint() {
    let temp_dir = tempfile::tempdir().unwrap();

    rollout_cmd()
        .current_dir(temp_dir.path())
        .args(["init", "--endpoint", "https://platform.internal"])
        .assert()
        .success();

    let content = fs::read_to_string(temp_dir.path().join("rollout.yml")).unwrap();
    assert!(content.contains("https://platform.internal"));
}
