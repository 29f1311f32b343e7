//! CLI integration tests
//!
//! Tests the reltime CLI using assert_cmd. Every run points `--config` at a
//! temporary directory so the user's own settings never leak in.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn reltime(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("reltime")
        .expect("Failed to locate reltime binary - ensure it's built before running tests");
    cmd.env_remove("RUST_LOG")
        .arg("--config")
        .arg(dir.path().join("config.toml"));
    cmd
}

fn tempdir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

#[test]
fn test_cli_help() {
    reltime(&tempdir())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("reltime"))
        .stdout(predicate::str::contains("relative time"));
}

#[test]
fn test_cli_version() {
    reltime(&tempdir())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("reltime"));
}

#[test]
fn test_ago_with_dates() {
    reltime(&tempdir())
        .args(["ago", "2025-02-21", "--now", "2025-02-22"])
        .assert()
        .success()
        .stdout("a day ago\n");
}

#[test]
fn test_ago_with_millis() {
    reltime(&tempdir())
        .args(["ago", "0", "--now", "3600000"])
        .assert()
        .success()
        .stdout("an hour ago\n");
}

#[test]
fn test_ago_rejects_future() {
    reltime(&tempdir())
        .args(["ago", "2025-02-23", "--now", "2025-02-22"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Time cannot be in the future"));
}

#[test]
fn test_until_and_alias() {
    reltime(&tempdir())
        .args(["until", "2025-02-28", "--now", "2025-02-21"])
        .assert()
        .success()
        .stdout("in a week\n");

    reltime(&tempdir())
        .args(["in", "2027-02-21", "--now", "2025-02-21"])
        .assert()
        .success()
        .stdout("in 2 years\n");
}

#[test]
fn test_until_rejects_past() {
    reltime(&tempdir())
        .args(["until", "2025-02-21", "--now", "2025-02-22"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Time cannot be in the past"));
}

#[test]
fn test_until_calendar_flag() {
    reltime(&tempdir())
        .args(["until", "2025-03-21", "--now", "2025-02-21"])
        .assert()
        .success()
        .stdout("in 4 weeks\n");

    reltime(&tempdir())
        .args(["until", "2025-03-21", "--now", "2025-02-21", "--calendar"])
        .assert()
        .success()
        .stdout("in a month\n");
}

#[test]
fn test_json_output() {
    reltime(&tempdir())
        .args(["--json", "ago", "0", "--now", "2000"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""phrase":"2 seconds ago""#))
        .stdout(predicate::str::contains(r#""tense":"past""#));
}

#[test]
fn test_invalid_instant() {
    reltime(&tempdir())
        .args(["ago", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid instant"));
}

#[test]
fn test_units() {
    reltime(&tempdir())
        .arg("units")
        .assert()
        .success()
        .stdout(predicate::str::contains("an hour"))
        .stdout(predicate::str::contains("604800"));
}

#[test]
fn test_config_init_set_get() {
    let dir = tempdir();

    reltime(&dir).args(["config", "init"]).assert().success();
    assert!(dir.path().join("config.toml").exists());

    reltime(&dir)
        .args(["config", "set", "format.month_policy", "calendar"])
        .assert()
        .success();

    reltime(&dir)
        .args(["config", "get", "format.month_policy"])
        .assert()
        .success()
        .stdout("calendar\n");

    // The stored policy now applies without --calendar
    reltime(&dir)
        .args(["until", "2025-03-21", "--now", "2025-02-21"])
        .assert()
        .success()
        .stdout("in a month\n");
}

#[test]
fn test_config_get_unknown_key() {
    reltime(&tempdir())
        .args(["config", "get", "format.nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Key not found"));
}

#[test]
fn test_config_show_defaults() {
    reltime(&tempdir())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("month_policy = \"fixed\""));
}

#[test]
fn test_cli_unknown_command() {
    reltime(&tempdir())
        .arg("nonexistent-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
