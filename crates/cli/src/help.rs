// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);
    let context = fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_sync}
  {push}        Sync a markdown checklist to the project board
  {pull}        Render the project board as a markdown checklist

{header_setup}
  {init}        Write a .todoboard.toml for this directory
  {completion}  Generate shell completions
",
        header_sync = colors::header("Sync:"),
        header_setup = colors::header("Setup:"),
        push = colors::literal("push"),
        pull = colors::literal("pull"),
        init = colors::literal("init"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  todoboard init --owner <owner> --repo <repo> --project 1   Configure the board
  todoboard pull --out TODO.md                               Write the board to a file
  todoboard push TODO.md                                     Sync checkbox changes back",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
