// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod init;
pub mod pull;
pub mod push;

use std::path::{Path, PathBuf};

use crate::cli::BoardArgs;
use crate::config::{self, Config, Settings};
use crate::error::Result;

/// Global flags every command resolves against.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub directory: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub token: Option<String>,
    pub board: BoardArgs,
}

impl Context {
    /// Path of the config file.
    pub fn config_path(&self) -> PathBuf {
        config::config_path(self.directory.as_deref(), self.config.as_deref())
    }

    /// Resolve a user-supplied path against `-C`.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.directory {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Load the config file, apply flag overrides and resolve.
    pub fn settings(&self) -> Result<Settings> {
        Config::load_or_default(&self.config_path())?
            .merge(&self.board)
            .resolve()
    }

    pub fn token(&self) -> Result<String> {
        config::resolve_token(self.token.as_deref())
    }
}

/// Build the runtime a command drives its requests on.
pub fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Runtime::new()?)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;
