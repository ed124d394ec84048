// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::config::{BoardConfig, Config};
use crate::error::{Error, Result};

use super::Context;

pub fn run(ctx: &Context, endpoint: Option<String>, force: bool) -> Result<()> {
    let path = run_impl(ctx, endpoint, force)?;
    println!("Initialized board config at {}", path.display());
    Ok(())
}

/// Write the config file from the board flags and return its path.
///
/// The flags must describe a complete board, and an existing file is only
/// replaced with `force`.
pub(crate) fn run_impl(ctx: &Context, endpoint: Option<String>, force: bool) -> Result<PathBuf> {
    let path = ctx.config_path();
    if path.exists() && !force {
        return Err(Error::AlreadyInitialized(path.display().to_string()));
    }

    let board = &ctx.board;
    let config = Config {
        board: BoardConfig {
            scope: Some(board.scope.unwrap_or_default()),
            owner: board.owner.clone(),
            repo: board.repo.clone(),
            project: board.project,
            includes_note: Some(board.includes_note.unwrap_or(false)),
            endpoint,
        },
        mappings: Vec::new(),
    };
    let settings = config.clone().resolve()?;

    config.save(&path)?;
    tracing::info!(path = %path.display(), target = %settings.target, "wrote config");
    Ok(path)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
