// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Push command tests.
//!
//! These cover everything push does before it reaches the board: reading
//! the checklist, resolving the board settings and finding a token. The
//! configured endpoint is unreachable, so a push that gets past those
//! steps fails with a transport error.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

const CHECKLIST: &str = "## Todo\n\n- [ ] Write docs\n\n## Done\n\n- [x] [Ship it](https://github.com/azu/todo/issues/1)\n";

// =============================================================================
// Settings resolution
// =============================================================================

#[test]
fn push_without_config_reports_missing_owner() {
    let temp = TempDir::new().unwrap();
    let file = write_checklist(&temp, "TODO.md", CHECKLIST);

    todoboard()
        .args(["push", &file])
        .current_dir(temp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("owner is not configured"))
        .stderr(predicate::str::contains("hint:"));
}

#[test]
fn push_without_project_reports_missing_project() {
    let temp = TempDir::new().unwrap();
    let file = write_checklist(&temp, "TODO.md", CHECKLIST);

    todoboard()
        .args(["push", &file, "--owner", "azu", "--repo", "todo"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("project is not configured"));
}

#[test]
fn push_repository_scope_requires_repo() {
    let temp = TempDir::new().unwrap();
    let file = write_checklist(&temp, "TODO.md", CHECKLIST);

    todoboard()
        .args(["push", &file, "--owner", "azu", "--project", "1"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("repository name is required"));
}

#[parameterized(
    team = { "team" },
    empty = { "" },
    plural_repo = { "repos" },
)]
fn push_rejects_unknown_scope(scope: &str) {
    todoboard()
        .args(["push", "TODO.md", "--scope", scope])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown scope"));
}

// =============================================================================
// Token resolution
// =============================================================================

#[test]
fn push_without_token_fails_with_hint() {
    let temp = init_temp();
    let file = write_checklist(&temp, "TODO.md", CHECKLIST);

    todoboard()
        .args(["push", &file])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no GitHub token found"))
        .stderr(predicate::str::contains("TODOBOARD_TOKEN"));
}

#[parameterized(
    flag = { None, &["--token", "t0ken"] },
    todoboard_token = { Some("TODOBOARD_TOKEN"), &[] },
    github_token = { Some("GITHUB_TOKEN"), &[] },
)]
fn push_with_token_reaches_the_endpoint(env: Option<&str>, extra: &[&str]) {
    let temp = init_temp();
    let file = write_checklist(&temp, "TODO.md", CHECKLIST);

    let mut cmd = todoboard();
    if let Some(name) = env {
        cmd.env(name, "t0ken");
    }
    cmd.args(["push", &file])
        .args(extra)
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("request failed"))
        .stderr(predicate::str::contains("no GitHub token").not());
}

#[test]
fn push_blank_token_env_is_ignored() {
    let temp = init_temp();
    let file = write_checklist(&temp, "TODO.md", CHECKLIST);

    todoboard()
        .env("TODOBOARD_TOKEN", "   ")
        .args(["push", &file])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no GitHub token found"));
}

// =============================================================================
// Input
// =============================================================================

#[test]
fn push_missing_file_fails() {
    let temp = init_temp();

    todoboard()
        .args(["push", "missing.md", "--token", "t0ken"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("io error"));
}

#[test]
fn push_reads_stdin_by_default() {
    let temp = init_temp();

    todoboard()
        .arg("push")
        .write_stdin(CHECKLIST)
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no GitHub token found"));
}

#[test]
fn push_file_is_resolved_against_directory_flag() {
    let temp = init_temp();
    let file = write_checklist(&temp, "TODO.md", CHECKLIST);

    todoboard()
        .args(["-C", temp.path().to_str().unwrap(), "push", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no GitHub token found"));
}

#[test]
fn dry_run_still_needs_the_board() {
    let temp = init_temp();
    let file = write_checklist(&temp, "TODO.md", CHECKLIST);

    todoboard()
        .args(["push", &file, "--dry-run", "--token", "t0ken"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("request failed"));
}

// =============================================================================
// Help
// =============================================================================

#[test]
fn push_help_shows_examples() {
    todoboard()
        .args(["push", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--dry-run"))
        .stdout(predicate::str::contains("Examples:"))
        .stdout(predicate::str::contains("todoboard push TODO.md"));
}
