// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

use crate::sync::TransportError;

/// All possible errors that can occur in the tbrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("project not found: {target} project #{number}\n  hint: check the owner scope, owner, repository and project number")]
    ProjectNotFound { target: String, number: u64 },

    #[error("unexpected mutation response: expected {expected} results, got {actual}\n  hint: the board may be partially updated, run 'todoboard pull' before pushing again")]
    ProtocolMismatch { expected: usize, actual: usize },

    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("invalid owner scope: '{0}'\n  hint: valid scopes are: user, org, repository")]
    InvalidScope(String),

    #[error("repository name is required for repository projects\n  hint: set 'repo' under [board] or pass --repo")]
    MissingRepository,

    #[error("{field} is not configured\n  hint: set '{field}' under [board] in .todoboard.toml or pass --{field}")]
    MissingConfig { field: &'static str },

    #[error("no GitHub token found\n  hint: set TODOBOARD_TOKEN or GITHUB_TOKEN, or pass --token")]
    MissingToken,

    #[error("already initialized at {0}\n  hint: pass --force to overwrite it")]
    AlreadyInitialized(String),

    #[error("request failed: {0}")]
    Transport(#[from] TransportError),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for tbrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<tb_core::Error> for Error {
    fn from(e: tb_core::Error) -> Self {
        match e {
            tb_core::Error::ProjectNotFound { target, number } => {
                Error::ProjectNotFound { target, number }
            }
            tb_core::Error::ProtocolMismatch { expected, actual } => {
                Error::ProtocolMismatch { expected, actual }
            }
            tb_core::Error::UnknownOperation(s) => Error::UnknownOperation(s),
            tb_core::Error::InvalidScope(s) => Error::InvalidScope(s),
            tb_core::Error::MissingRepository => Error::MissingRepository,
            tb_core::Error::Json(e) => Error::Json(e),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
