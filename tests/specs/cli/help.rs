// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help output tests.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

#[test]
fn without_arguments_shows_usage_and_fails() {
    todoboard()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn main_help_groups_commands() {
    todoboard()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sync:"))
        .stdout(predicate::str::contains("Setup:"))
        .stdout(predicate::str::contains("push"))
        .stdout(predicate::str::contains("pull"))
        .stdout(predicate::str::contains("Get started:"));
}

#[test]
fn h_and_help_produce_same_output() {
    let short = todoboard().arg("-h").output().unwrap();
    let long = todoboard().arg("--help").output().unwrap();
    assert!(short.status.success());
    assert!(long.status.success());
    // -h prints the short about, --help the long one; both list the commands
    let short = String::from_utf8_lossy(&short.stdout);
    assert!(short.contains("Sync:"));
}

#[parameterized(
    push = { "push" },
    pull = { "pull" },
    init = { "init" },
    completion = { "completion" },
)]
fn command_supports_help_flag(cmd: &str) {
    todoboard()
        .args([cmd, "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Examples:"));
}

#[parameterized(
    push = { "push" },
    pull = { "pull" },
    init = { "init" },
)]
fn board_flags_are_global(cmd: &str) {
    todoboard()
        .args([cmd, "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--scope"))
        .stdout(predicate::str::contains("--owner"))
        .stdout(predicate::str::contains("--repo"))
        .stdout(predicate::str::contains("--project"))
        .stdout(predicate::str::contains("--token"));
}

#[test]
fn help_subcommand_works() {
    todoboard()
        .args(["help", "pull"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--out"));
}

#[test]
fn help_unknown_command_fails() {
    todoboard().args(["help", "sync"]).assert().failure();
}
