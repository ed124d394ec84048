// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test files,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Nothing listens here, so any request fails fast with a connection error.
pub const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:9/graphql";

/// The binary with tokens, log and color settings cleared from the environment.
pub fn todoboard() -> Command {
    let mut cmd = cargo_bin_cmd!("todoboard");
    cmd.env_remove("TODOBOARD_TOKEN")
        .env_remove("GITHUB_TOKEN")
        .env_remove("TODOBOARD_LOG")
        .env_remove("COLOR");
    cmd
}

/// A temp directory holding a config for a repository project whose
/// endpoint cannot be reached.
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    todoboard()
        .args(["init", "--owner", "azu", "--repo", "todo", "--project", "1"])
        .args(["--endpoint", UNREACHABLE_ENDPOINT])
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Write a checklist into `temp` and return its file name.
pub fn write_checklist(temp: &TempDir, name: &str, content: &str) -> String {
    std::fs::write(temp.path().join(name), content).unwrap();
    name.to_string()
}
