// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text helpers for note bodies and markdown output.

/// Characters that carry meaning in headings and link text.
const MARKDOWN_SPECIAL: &[char] = &['\\', '`', '*', '_', '[', ']', '<', '>', '#', '|', '&'];

/// Remove the common leading indentation from a block of text.
///
/// Leading and trailing blank lines are dropped and whitespace-only lines
/// become empty. Tabs and spaces both count as one column.
pub fn dedent(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let Some(start) = lines.iter().position(|l| !l.trim().is_empty()) else {
        return String::new();
    };
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .unwrap_or(start);
    let block = &lines[start..=end];

    let indent = block
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);

    block
        .iter()
        .map(|l| {
            if l.trim().is_empty() {
                ""
            } else {
                l.get(indent..).unwrap_or("").trim_end()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split a note into its first line and the dedented remainder.
///
/// The remainder is `None` when nothing but whitespace follows the first line.
pub fn split_first_line(text: &str) -> (String, Option<String>) {
    let (first, rest) = match text.split_once('\n') {
        Some((first, rest)) => (first, rest),
        None => (text, ""),
    };
    let body = dedent(rest);
    let body = if body.is_empty() { None } else { Some(body) };
    (first.trim_end_matches('\r').trim().to_string(), body)
}

/// Backslash-escape markdown metacharacters so text renders literally.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if MARKDOWN_SPECIAL.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Format a markdown inline link, escaping the text.
///
/// Destinations with spaces or parentheses are wrapped in angle brackets.
pub fn markdown_link(text: &str, url: &str) -> String {
    let dest = if url.contains([' ', '(', ')']) {
        format!("<{}>", url)
    } else {
        url.to_string()
    };
    format!("[{}]({})", escape_markdown(text), dest)
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
