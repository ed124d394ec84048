// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Init command tests.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

fn config(temp: &TempDir) -> String {
    std::fs::read_to_string(temp.path().join(".todoboard.toml")).unwrap()
}

#[test]
fn init_writes_config() {
    let temp = TempDir::new().unwrap();

    todoboard()
        .args(["init", "--owner", "azu", "--repo", "todo", "--project", "3"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized board config at"));

    let text = config(&temp);
    assert!(text.contains("[board]"));
    assert!(text.contains("scope = \"repository\""));
    assert!(text.contains("owner = \"azu\""));
    assert!(text.contains("repo = \"todo\""));
    assert!(text.contains("project = 3"));
}

#[parameterized(
    user = { "user", "user" },
    org = { "org", "organization" },
)]
fn init_records_scope(flag: &str, stored: &str) {
    let temp = TempDir::new().unwrap();

    todoboard()
        .args(["init", "--scope", flag, "--owner", "acme", "--project", "2"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(config(&temp).contains(&format!("scope = \"{stored}\"")));
}

#[test]
fn init_refuses_to_overwrite() {
    let temp = init_temp();

    todoboard()
        .args(["init", "--owner", "other", "--repo", "todo", "--project", "1"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"))
        .stderr(predicate::str::contains("--force"));

    assert!(config(&temp).contains("owner = \"azu\""));
}

#[test]
fn init_force_overwrites() {
    let temp = init_temp();

    todoboard()
        .args(["init", "--owner", "other", "--repo", "todo", "--project", "1", "--force"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert!(config(&temp).contains("owner = \"other\""));
}

#[test]
fn init_incomplete_board_writes_nothing() {
    let temp = TempDir::new().unwrap();

    todoboard()
        .args(["init", "--owner", "azu", "--project", "1"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("repository name is required"));

    assert!(!temp.path().join(".todoboard.toml").exists());
}

#[test]
fn init_honours_directory_and_config_flags() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().to_str().unwrap();

    todoboard()
        .args(["-C", dir, "--config", "board.toml", "init"])
        .args(["--owner", "azu", "--repo", "todo", "--project", "1"])
        .assert()
        .success();

    assert!(temp.path().join("board.toml").exists());
    assert!(!temp.path().join(".todoboard.toml").exists());
}

#[test]
fn init_records_endpoint() {
    let temp = init_temp();
    assert!(config(&temp).contains(UNREACHABLE_ENDPOINT));
}
