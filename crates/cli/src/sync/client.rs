// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board reads.

use tb_core::{board_query, normalize, Board, BoardTarget};

use super::transport::{GraphqlTransport, HttpTransport};
use crate::error::Result;

/// Fetches project boards through a [`GraphqlTransport`].
pub struct BoardClient<T: GraphqlTransport = HttpTransport> {
    transport: T,
}

impl<T: GraphqlTransport> BoardClient<T> {
    pub fn new(transport: T) -> Self {
        BoardClient { transport }
    }

    /// Read and normalize one project board.
    ///
    /// Issues exactly one request. Note cards are dropped unless
    /// `includes_note` is set.
    pub async fn fetch_board(
        &self,
        target: &BoardTarget,
        project_number: u64,
        includes_note: bool,
    ) -> Result<Board> {
        let request = board_query(target, project_number);
        let data = self.transport.execute(request).await?;
        let board = normalize(target, project_number, data, includes_note)?;
        tracing::info!(
            %target,
            project = project_number,
            columns = board.columns.len(),
            items = board.item_count(),
            "fetched board"
        );
        Ok(board)
    }
}
