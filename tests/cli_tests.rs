//! CLI integration tests
//!
//! These run against the compiled binary and never need a running
//! notification server: they cover argument parsing and the config
//! subcommand only.

use assert_cmd::Command;
use predicates::prelude::*;

fn desktoast() -> Command {
    Command::cargo_bin("desktoast").expect("binary exists")
}

#[test]
fn help_output() {
    desktoast()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("notification"))
        .stdout(predicate::str::contains("--icon"))
        .stdout(predicate::str::contains("--timeout"))
        .stdout(predicate::str::contains("--urgency"))
        .stdout(predicate::str::contains("--tag"))
        .stdout(predicate::str::contains("--wait"));
}

#[test]
fn version_output() {
    desktoast()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("desktoast"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_help() {
    desktoast()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("set"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("path"));
}

#[test]
fn config_path_command() {
    let dir = tempfile::tempdir().unwrap();
    desktoast()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("desktoast"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_init_set_get_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    desktoast()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success();

    desktoast()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "set", "urgency", "critical"])
        .assert()
        .success();

    desktoast()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "get", "urgency"])
        .assert()
        .success()
        .stdout(predicate::str::contains("critical"));
}

#[test]
fn config_list_shows_all_keys() {
    let dir = tempfile::tempdir().unwrap();

    desktoast()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success();

    desktoast()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("app_name"))
        .stdout(predicate::str::contains("timeout"))
        .stdout(predicate::str::contains("urgency"))
        .stdout(predicate::str::contains("backend"));
}

#[test]
fn config_init_twice_fails() {
    let dir = tempfile::tempdir().unwrap();

    desktoast()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success();

    desktoast()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn config_get_unset_key_reports_not_set() {
    let dir = tempfile::tempdir().unwrap();

    desktoast()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["config", "get", "icon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not set)"));
}
