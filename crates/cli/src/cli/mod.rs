// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

pub use args::{AuthArgs, BoardArgs};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "todoboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Sync a markdown checklist with a GitHub project board")]
#[command(
    long_about = "Sync a markdown checklist with a GitHub project board.\n\n\
    Checking a box closes the linked issue or pull request, unchecking it reopens it. \
    The board can also be pulled back down as a checklist."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Run as if todoboard was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<PathBuf>,

    /// Config file (defaults to .todoboard.toml)
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub board: BoardArgs,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Sync a markdown checklist to the project board
    #[command(after_help = colors::examples("\
Examples:
  todoboard push TODO.md               Close and reopen cards to match TODO.md
  todoboard push - < TODO.md           Read the checklist from stdin
  todoboard push TODO.md --dry-run     Show what would change
  todoboard push TODO.md -o json       Print the operations as JSON"))]
    Push {
        /// Checklist file, or '-' for stdin
        #[arg(default_value = "-")]
        file: String,

        /// Print the planned operations without sending them
        #[arg(long)]
        dry_run: bool,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Render the project board as a markdown checklist
    #[command(after_help = colors::examples("\
Examples:
  todoboard pull                       Print the board as markdown
  todoboard pull --out TODO.md         Write the board to TODO.md
  todoboard pull -o json               Print the normalized board as JSON"))]
    Pull {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Write a .todoboard.toml from the board flags
    #[command(after_help = colors::examples("\
Examples:
  todoboard init --owner azu --repo todo --project 1   Repository project
  todoboard init --scope org --owner acme --project 3  Organization project
  todoboard init --owner azu --repo todo --project 1 --force"))]
    Init {
        /// GraphQL endpoint to record in the config
        #[arg(long, value_name = "URL")]
        endpoint: Option<String>,

        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  todoboard completion bash > ~/.local/share/bash-completion/completions/todoboard
  todoboard completion zsh > ~/.zfunc/_todoboard
  todoboard completion fish > ~/.config/fish/completions/todoboard.fish")
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
