// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board writes.

use tb_core::mutation::{compile, verify_response};
use tb_core::SyncOperation;

use super::transport::{GraphqlTransport, HttpTransport};
use crate::error::Result;

/// Sends a whole sync as one batched mutation.
pub struct MutationBatcher<T: GraphqlTransport = HttpTransport> {
    transport: T,
}

impl<T: GraphqlTransport> MutationBatcher<T> {
    pub fn new(transport: T) -> Self {
        MutationBatcher { transport }
    }

    /// Apply `operations` in a single request.
    ///
    /// Nothing is sent for an empty list. Every operation is compiled before
    /// the request goes out, and the response must answer each of them.
    pub async fn execute(&self, operations: &[SyncOperation]) -> Result<()> {
        if operations.is_empty() {
            tracing::debug!("no operations to send");
            return Ok(());
        }
        let request = compile(operations)?;
        let data = self.transport.execute(request).await?;
        verify_response(operations.len(), &data)?;
        tracing::info!(operations = operations.len(), "applied mutation batch");
        Ok(())
    }
}
