// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reconciliation of checklist records against a board snapshot.
//!
//! The document always wins. For every record the matching board item is
//! looked up and, if its state differs, one operation is emitted to bring
//! the board in line. A board that already agrees produces no operations,
//! so pushing the same document twice is a no-op the second time.
//!
//! Matching runs two passes over the board in column-then-item order:
//!
//! 1. url: both sides have a url and the urls are equal
//! 2. title: titles are equal and the urls do not contradict each other
//!
//! The first hit of the first pass that finds anything wins.

use crate::model::{Board, BoardItem, ChecklistItem, ChecklistKind, ItemKind, SyncOperation};

/// Compute the operations that make `board` agree with `items`.
pub fn reconcile(items: &[ChecklistItem], board: &Board, includes_note: bool) -> Vec<SyncOperation> {
    reconcile_with(items, board, includes_note, ChecklistItem::clone)
}

/// Like [`reconcile`], rewriting each record with `mapping` before it is compared.
///
/// The records passed in are left untouched.
pub fn reconcile_with<F>(
    items: &[ChecklistItem],
    board: &Board,
    includes_note: bool,
    mapping: F,
) -> Vec<SyncOperation>
where
    F: Fn(&ChecklistItem) -> ChecklistItem,
{
    let mut operations = Vec::new();

    for original in items {
        let item = mapping(original);
        let Some(op) = plan_item(&item, board, includes_note) else {
            continue;
        };
        if operations.contains(&op) {
            tracing::debug!(%op, "skipping duplicate operation");
            continue;
        }
        operations.push(op);
    }

    tracing::debug!(
        records = items.len(),
        board_items = board.item_count(),
        operations = operations.len(),
        "reconciled checklist against board"
    );
    operations
}

/// Find the board item a record refers to.
pub fn find_match<'a>(item: &ChecklistItem, board: &'a Board) -> Option<&'a BoardItem> {
    if let Some(url) = item.url.as_deref() {
        let by_url = board
            .items()
            .map(|(_, candidate)| candidate)
            .find(|candidate| candidate.url.as_deref() == Some(url));
        if by_url.is_some() {
            return by_url;
        }
    }

    board
        .items()
        .map(|(_, candidate)| candidate)
        .find(|candidate| candidate.title == item.title && !urls_conflict(item, candidate))
}

fn urls_conflict(item: &ChecklistItem, candidate: &BoardItem) -> bool {
    match (item.url.as_deref(), candidate.url.as_deref()) {
        (Some(a), Some(b)) => a != b,
        _ => false,
    }
}

fn plan_item(item: &ChecklistItem, board: &Board, includes_note: bool) -> Option<SyncOperation> {
    let Some(target) = find_match(item, board) else {
        return plan_unmatched(item, board, includes_note);
    };

    let desired = item.desired_state();
    if desired == target.state {
        return None;
    }

    match target.kind {
        ItemKind::Issue | ItemKind::PullRequest => {
            let op = if desired.is_closed() {
                SyncOperation::Close {
                    kind: target.kind,
                    id: target.id.clone(),
                }
            } else {
                SyncOperation::Reopen {
                    kind: target.kind,
                    id: target.id.clone(),
                }
            };
            tracing::debug!(title = %item.title, %op, "state differs");
            Some(op)
        }
        ItemKind::NoteCard if desired.is_closed() => {
            tracing::debug!(title = %item.title, id = %target.id, "archiving note");
            Some(SyncOperation::ArchiveNote {
                id: target.id.clone(),
            })
        }
        ItemKind::NoteCard => {
            tracing::debug!(title = %item.title, id = %target.id, "archived notes cannot be reopened");
            None
        }
    }
}

fn plan_unmatched(item: &ChecklistItem, board: &Board, includes_note: bool) -> Option<SyncOperation> {
    if !includes_note || item.kind() != ChecklistKind::Note || item.checked {
        tracing::debug!(title = %item.title, "no matching board item");
        return None;
    }
    // New notes always land in the first column.
    let Some(column) = board.columns.first() else {
        tracing::warn!(title = %item.title, "board has no columns, cannot add note");
        return None;
    };
    Some(SyncOperation::CreateNote {
        column_id: column.id.clone(),
        title: item.title.clone(),
        body: item.body.clone().unwrap_or_default(),
    })
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
