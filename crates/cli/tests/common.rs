// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn todoboard() -> Command {
    let mut cmd = cargo_bin_cmd!("todoboard");
    cmd.env_remove("TODOBOARD_TOKEN")
        .env_remove("GITHUB_TOKEN")
        .env_remove("TODOBOARD_LOG");
    cmd
}

/// Helper to create a temp directory with a config file
pub fn init_temp(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(".todoboard.toml"), config).unwrap();
    temp
}

/// A repository board behind an endpoint nothing listens on
pub const UNREACHABLE_CONFIG: &str = r#"
[board]
owner = "azu"
repo = "todo"
project = 1
endpoint = "http://127.0.0.1:9/graphql"
"#;
