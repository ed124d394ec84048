// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Completion command tests.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;

// =============================================================================
// Parameterized tests for shell completion generation
// =============================================================================

#[yare::parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
    powershell = { "powershell" },
    elvish = { "elvish" },
)]
fn completion_generates_non_empty_output(shell: &str) {
    let output = todoboard().args(["completion", shell]).output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.is_empty(), "Completion output should not be empty");
}

#[yare::parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
)]
fn completion_mentions_every_command(shell: &str) {
    let output = todoboard().args(["completion", shell]).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    for command in ["push", "pull", "init", "completion"] {
        assert!(
            stdout.contains(command),
            "{shell} completion should mention '{command}'"
        );
    }
}

// =============================================================================
// Shell-specific syntax
// =============================================================================

#[test]
fn completion_bash_registers_function() {
    todoboard()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"))
        .stdout(predicate::str::contains("_todoboard"));
}

#[test]
fn completion_zsh_has_compdef() {
    todoboard()
        .args(["completion", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef todoboard"));
}

#[test]
fn completion_fish_uses_complete_command() {
    todoboard()
        .args(["completion", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete -c todoboard"));
}

#[test]
fn completion_includes_board_flags() {
    todoboard()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--owner"))
        .stdout(predicate::str::contains("--project"))
        .stdout(predicate::str::contains("--includes-note"));
}

// =============================================================================
// Error handling tests
// =============================================================================

#[test]
fn completion_without_shell_shows_help() {
    todoboard()
        .arg("completion")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn completion_invalid_shell_fails() {
    todoboard()
        .args(["completion", "invalid_shell"])
        .assert()
        .failure();
}

#[test]
fn completion_needs_no_config_or_token() {
    let temp = TempDir::new().unwrap();
    todoboard()
        .args(["completion", "bash"])
        .current_dir(temp.path())
        .assert()
        .success();
    assert!(!temp.path().join(".todoboard.toml").exists());
}
