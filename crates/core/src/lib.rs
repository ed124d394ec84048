// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! tb-core: Sync engine for markdown checklists and project boards
//!
//! This crate holds everything that does not touch the network: checklist
//! parsing, board query construction and normalization, reconciliation,
//! mutation batching and markdown rendering. The todoboard CLI drives it.

pub mod board;
pub mod checklist;
pub mod error;
pub mod graphql;
pub mod model;
pub mod mutation;
pub mod reconcile;
pub mod render;
pub mod text;

pub use board::{board_query, normalize, BoardTarget, OwnerScope};
pub use checklist::parse;
pub use error::{Error, Result};
pub use graphql::GraphqlRequest;
pub use model::{
    Board, BoardItem, ChecklistItem, ChecklistKind, Column, ItemKind, ItemState, Label,
    SyncOperation,
};
pub use reconcile::{reconcile, reconcile_with};
pub use render::{render, render_with};
