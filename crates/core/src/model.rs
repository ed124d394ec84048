// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core data types shared by the parser, reconciler and renderer.
//!
//! A [`ChecklistItem`] comes from the markdown document, a [`Board`] from the
//! remote project. [`SyncOperation`]s describe what must change on the board
//! for it to agree with the document.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a checklist entry points at tracked work or is a freeform note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistKind {
    /// Entry links to an issue or pull request.
    Tracked,
    /// Plain text entry with no link.
    Note,
}

/// A task record extracted from the markdown document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// First line of the entry, without the checkbox.
    pub title: String,
    /// State of the checkbox.
    pub checked: bool,
    /// First link target found inside the entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Dedented remainder of the entry after its first line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ChecklistItem {
    pub fn kind(&self) -> ChecklistKind {
        if self.url.is_some() {
            ChecklistKind::Tracked
        } else {
            ChecklistKind::Note
        }
    }

    /// The board state this entry asks for.
    pub fn desired_state(&self) -> ItemState {
        ItemState::from_checked(self.checked)
    }
}

/// The three kinds of card a project column can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Issue,
    PullRequest,
    /// Freeform note card with no linked content.
    NoteCard,
}

impl ItemKind {
    /// Returns the string representation used in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Issue => "issue",
            ItemKind::PullRequest => "pull_request",
            ItemKind::NoteCard => "note_card",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Open/closed state of a board item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemState {
    Open,
    Closed,
}

impl ItemState {
    /// Maps a checkbox to a state: checked is closed, unchecked is open.
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            ItemState::Closed
        } else {
            ItemState::Open
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, ItemState::Closed)
    }

    /// Returns the string representation used in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemState::Open => "open",
            ItemState::Closed => "closed",
        }
    }
}

impl fmt::Display for ItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A label attached to an issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A card on the board, normalized across issues, pull requests and notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardItem {
    pub kind: ItemKind,
    /// Remote node id. Stable across fetches, unique within a snapshot.
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
    pub state: ItemState,
}

/// A board column, with items in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub name: String,
    pub items: Vec<BoardItem>,
}

/// A snapshot of a project board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Board {
    /// Iterates items in column-then-item order, paired with their column.
    pub fn items(&self) -> impl Iterator<Item = (&Column, &BoardItem)> {
        self.columns
            .iter()
            .flat_map(|column| column.items.iter().map(move |item| (column, item)))
    }

    pub fn item_count(&self) -> usize {
        self.columns.iter().map(|c| c.items.len()).sum()
    }
}

/// One state-changing action required to make the board agree with the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SyncOperation {
    /// Reopen an issue or pull request.
    Reopen { kind: ItemKind, id: String },

    /// Close an issue or pull request.
    Close { kind: ItemKind, id: String },

    /// Archive a note card.
    ArchiveNote { id: String },

    /// Add a new note card to a column.
    CreateNote {
        column_id: String,
        title: String,
        body: String,
    },
}

impl fmt::Display for SyncOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncOperation::Reopen { kind, id } => write!(f, "reopen {} {}", kind, id),
            SyncOperation::Close { kind, id } => write!(f, "close {} {}", kind, id),
            SyncOperation::ArchiveNote { id } => write!(f, "archive note {}", id),
            SyncOperation::CreateNote {
                column_id, title, ..
            } => write!(f, "create note \"{}\" in column {}", title, column_id),
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
