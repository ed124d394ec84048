// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are flattened into [`Cli`](super::Cli) so every command
//! accepts the same board overrides.

use clap::Args;
use tb_core::OwnerScope;

/// Board selection overrides. Each flag wins over `.todoboard.toml`.
#[derive(Args, Clone, Debug, Default)]
pub struct BoardArgs {
    /// Owner scope of the project (user, org, repository)
    #[arg(long, global = true, value_parser = parse_scope)]
    pub scope: Option<OwnerScope>,

    /// User, organization or repository owner login
    #[arg(long, global = true)]
    pub owner: Option<String>,

    /// Repository name (repository scope only)
    #[arg(long, global = true)]
    pub repo: Option<String>,

    /// Project number
    #[arg(long, global = true, value_name = "N")]
    pub project: Option<u64>,

    /// Include note cards in the sync (--includes-note=false turns it off)
    #[arg(
        long,
        global = true,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub includes_note: Option<bool>,
}

/// Connection arguments.
#[derive(Args, Clone, Debug, Default)]
pub struct AuthArgs {
    /// GitHub token (defaults to TODOBOARD_TOKEN, then GITHUB_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,
}

fn parse_scope(s: &str) -> Result<OwnerScope, String> {
    s.parse::<OwnerScope>()
        .map_err(|_| format!("unknown scope '{s}' (expected user, org or repository)"))
}
