// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes used in help output.
pub mod codes {
    /// Section headers: steel blue
    pub const HEADER: u8 = 74;
    /// Commands and flags: light grey
    pub const LITERAL: u8 = 250;
    /// Placeholders and hints: medium grey
    pub const CONTEXT: u8 = 245;
}

const RESET: &str = "\x1b[0m";

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn paint(code: u8, text: &str) -> String {
    styled(should_colorize(), code, text)
}

fn styled(enabled: bool, code: u8, text: &str) -> String {
    if !enabled {
        return text.to_string();
    }
    format!("\x1b[38;5;{code}m{text}{RESET}")
}

pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Colorize an examples block.
///
/// ```text
/// Examples:
///   todoboard push TODO.md     Sync the checklist to the board
/// ```
///
/// Lines ending in `:` are headers. In example lines the command (everything
/// before the first run of two spaces) is a literal and `<...>` placeholders
/// are context; the description is left plain.
pub fn examples(text: &str) -> String {
    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];
            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                return format!("{indent}{}", header(trimmed));
            }
            match split_example(trimmed) {
                Some((command, description)) => {
                    format!("{indent}{}{description}", command_words(command))
                }
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split `command  description` at the first run of two or more spaces.
fn split_example(line: &str) -> Option<(&str, &str)> {
    let at = line.find("  ")?;
    let rest = &line[at..];
    if rest.trim().is_empty() {
        return None;
    }
    Some((&line[..at], rest))
}

fn command_words(command: &str) -> String {
    command
        .split(' ')
        .map(|word| {
            if word.starts_with('<') || word.starts_with('"') {
                context(word)
            } else {
                literal(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
