// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Version flag tests.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;

use common::*;
use yare::parameterized;

#[parameterized(
    long_version = { "--version" },
    short_v = { "-v" },
    silent_v = { "-V" },
)]
fn version_flag_outputs_version(flag: &str) {
    todoboard()
        .arg(flag)
        .assert()
        .success()
        .stdout(predicate::str::contains("todoboard"))
        .stdout(predicate::str::is_match(r"[0-9]+\.[0-9]+\.[0-9]+").unwrap());
}

#[test]
fn short_flags_match_long_flag() {
    let long = todoboard().arg("--version").output().unwrap();
    for flag in ["-v", "-V"] {
        let short = todoboard().arg(flag).output().unwrap();
        assert_eq!(
            String::from_utf8_lossy(&short.stdout),
            String::from_utf8_lossy(&long.stdout),
            "{flag} and --version should produce identical output"
        );
    }
}

#[test]
fn big_v_not_documented_in_help() {
    let output = todoboard().arg("--help").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("--version"));
    assert!(!stdout.contains(" -V,"), "-V should not be documented in help");
    assert!(!stdout.contains("[-V"), "-V should not be documented in help");
}

#[test]
fn version_subcommand_does_not_exist() {
    todoboard().arg("version").assert().failure();
}
