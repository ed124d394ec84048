// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board to markdown rendering.

use crate::model::{Board, BoardItem, Column, ItemKind};
use crate::text::{escape_markdown, markdown_link};

const BODY_INDENT: &str = "    ";

/// Render a board as a canonical checklist document.
pub fn render(board: &Board) -> String {
    render_with(board, BoardItem::clone)
}

/// Like [`render`], rewriting each item with `mapping` just before it is
/// written. The board itself is not modified.
pub fn render_with<F>(board: &Board, mapping: F) -> String
where
    F: Fn(&BoardItem) -> BoardItem,
{
    let blocks: Vec<String> = board
        .columns
        .iter()
        .map(|column| render_column(column, &mapping))
        .collect();
    let mut out = blocks.join("\n").trim().to_string();
    out.push('\n');
    out
}

fn render_column<F>(column: &Column, mapping: &F) -> String
where
    F: Fn(&BoardItem) -> BoardItem,
{
    let heading = format!("## {}\n", escape_markdown(&column.name));
    if column.items.is_empty() {
        return heading;
    }
    let mut block = heading;
    block.push('\n');
    let lines: Vec<String> = column
        .items
        .iter()
        .map(|item| render_item(&mapping(item)))
        .collect();
    block.push_str(&lines.join("\n"));
    block.push('\n');
    block
}

fn render_item(item: &BoardItem) -> String {
    let check = if item.state.is_closed() { "[x]" } else { "[ ]" };
    let label = match item.url.as_deref() {
        Some(url) if !url.is_empty() => markdown_link(&item.title, url),
        _ => escape_markdown(&item.title),
    };
    let mut line = format!("- {} {}", check, label);

    if item.kind == ItemKind::NoteCard {
        if let Some(body) = item.body.as_deref().filter(|b| !b.trim().is_empty()) {
            for body_line in body.lines() {
                line.push('\n');
                if !body_line.trim().is_empty() {
                    line.push_str(BODY_INDENT);
                    line.push_str(body_line);
                }
            }
        }
    }
    line
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
