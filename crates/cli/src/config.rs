// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board configuration.
//!
//! Configuration is stored in `.todoboard.toml`:
//!
//! ```toml
//! [board]
//! scope = "repository"
//! owner = "azu"
//! repo = "github-project-todo-md"
//! project = 1
//! includes_note = false
//!
//! [[mapping]]
//! from = "https://example.com/a"
//! to = "https://example.com/b"
//! ```
//!
//! Command-line flags override file values field by field.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use tb_core::{BoardItem, BoardTarget, ChecklistItem, OwnerScope};

use crate::cli::BoardArgs;
use crate::env;
use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".todoboard.toml";
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";

/// Contents of `.todoboard.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub board: BoardConfig,
    /// Url rewrites, applied in order.
    #[serde(default, rename = "mapping", skip_serializing_if = "Vec::is_empty")]
    pub mappings: Vec<UrlMapping>,
}

/// The `[board]` table. Every field may be left out and supplied by a flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<OwnerScope>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub includes_note: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

/// Rewrites the first occurrence of `from` in a url with `to`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlMapping {
    pub from: String,
    pub to: String,
}

impl UrlMapping {
    pub fn apply(&self, url: &str) -> String {
        url.replacen(&self.from, &self.to, 1)
    }
}

fn apply_all(mappings: &[UrlMapping], url: &str) -> String {
    mappings
        .iter()
        .fold(url.to_string(), |url, mapping| mapping.apply(&url))
}

impl Config {
    /// Loads configuration from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }

    /// Loads configuration from `path`, or an empty one if the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Config::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using flags only");
            Ok(Config::default())
        }
    }

    /// Saves configuration to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply command-line overrides on top of the file values.
    pub fn merge(mut self, args: &BoardArgs) -> Self {
        let board = &mut self.board;
        if let Some(scope) = args.scope {
            board.scope = Some(scope);
        }
        if let Some(owner) = &args.owner {
            board.owner = Some(owner.clone());
        }
        if let Some(repo) = &args.repo {
            board.repo = Some(repo.clone());
        }
        if let Some(project) = args.project {
            board.project = Some(project);
        }
        if let Some(includes_note) = args.includes_note {
            board.includes_note = Some(includes_note);
        }
        self
    }

    /// Resolve into the settings a sync needs.
    pub fn resolve(self) -> Result<Settings> {
        let board = self.board;
        let owner = board
            .owner
            .filter(|o| !o.trim().is_empty())
            .ok_or(Error::MissingConfig { field: "owner" })?;
        let project = board
            .project
            .ok_or(Error::MissingConfig { field: "project" })?;
        let target =
            BoardTarget::from_scope(board.scope.unwrap_or_default(), &owner, board.repo.as_deref())?;

        Ok(Settings {
            target,
            project,
            includes_note: board.includes_note.unwrap_or(false),
            endpoint: board
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            mappings: self.mappings,
        })
    }
}

/// Fully resolved board settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub target: BoardTarget,
    pub project: u64,
    pub includes_note: bool,
    pub endpoint: String,
    pub mappings: Vec<UrlMapping>,
}

impl Settings {
    /// Rewrite a checklist record's url with the configured mappings.
    pub fn map_item(&self, item: &ChecklistItem) -> ChecklistItem {
        ChecklistItem {
            url: item.url.as_deref().map(|u| apply_all(&self.mappings, u)),
            ..item.clone()
        }
    }

    /// Rewrite a board item's url with the configured mappings.
    pub fn map_board_item(&self, item: &BoardItem) -> BoardItem {
        BoardItem {
            url: item.url.as_deref().map(|u| apply_all(&self.mappings, u)),
            ..item.clone()
        }
    }
}

/// Where the config file lives for the given `-C` and `--config` flags.
pub fn config_path(directory: Option<&Path>, config: Option<&Path>) -> PathBuf {
    let base = directory.unwrap_or_else(|| Path::new("."));
    match config {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => base.join(path),
        None => base.join(CONFIG_FILE_NAME),
    }
}

/// Resolve the API token from the flag, then `TODOBOARD_TOKEN`, then `GITHUB_TOKEN`.
pub fn resolve_token(flag: Option<&str>) -> Result<String> {
    pick_token(flag, env::todoboard_token, env::github_token)
}

fn pick_token(
    flag: Option<&str>,
    primary: impl FnOnce() -> Option<String>,
    fallback: impl FnOnce() -> Option<String>,
) -> Result<String> {
    flag.filter(|t| !t.trim().is_empty())
        .map(str::to_string)
        .or_else(primary)
        .or_else(fallback)
        .ok_or(Error::MissingToken)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
