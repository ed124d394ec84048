// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for tb-core operations.

use thiserror::Error;

/// All possible errors that can occur in tb-core operations.
///
/// Document parsing never fails; these cover board responses and
/// mutation batches.
#[derive(Debug, Error)]
pub enum Error {
    #[error("project not found: {target} project #{number}\n  hint: check the owner scope, owner, repository and project number")]
    ProjectNotFound { target: String, number: u64 },

    #[error("unexpected mutation response: expected {expected} results, got {actual}\n  hint: the board may be partially updated, pull it before pushing again")]
    ProtocolMismatch { expected: usize, actual: usize },

    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("invalid owner scope: '{0}'\n  hint: valid scopes are: user, org, repository")]
    InvalidScope(String),

    #[error("repository name is required for repository projects\n  hint: set 'repo' in the config or pass --repo")]
    MissingRepository,

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for tb-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
