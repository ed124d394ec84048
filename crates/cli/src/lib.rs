// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tbrs - Sync a markdown checklist with a GitHub project board.
//!
//! This crate provides the `todoboard` CLI on top of [`tb_core`]. The core
//! crate parses, reconciles and renders; this crate owns configuration,
//! the GraphQL transport and the commands.
//!
//! # Main Components
//!
//! - [`Config`] - `.todoboard.toml` plus flag overrides
//! - [`sync::BoardClient`] - fetches and normalizes a board
//! - [`sync::MutationBatcher`] - applies sync operations in one request
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use clap::Parser;
//! use tbrs::Cli;
//!
//! tbrs::run(Cli::parse())?;
//! ```

mod cli;
pub mod colors;
mod commands;
pub mod help;

pub mod config;
pub mod env;
pub mod error;
pub mod sync;

pub use cli::{AuthArgs, BoardArgs, Cli, Command, OutputFormat};
pub use config::{Config, Settings};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

use commands::Context;

/// Run a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let Cli {
        directory,
        config,
        auth,
        board,
        command,
        ..
    } = cli;
    let ctx = Context {
        directory,
        config,
        token: auth.token,
        board,
    };

    match command {
        Command::Push {
            file,
            dry_run,
            output,
        } => commands::push::run(&ctx, &file, dry_run, output),
        Command::Pull { output, out } => commands::pull::run(&ctx, output, out),
        Command::Init { endpoint, force } => commands::init::run(&ctx, endpoint, force),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "todoboard", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
