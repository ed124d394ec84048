// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Batched board mutations.
//!
//! All operations of one sync are compiled into a single GraphQL mutation.
//! Each operation becomes one aliased field whose input is bound to its own
//! variable, so the response has exactly one top-level key per operation:
//!
//! ```text
//! mutation($input0: CloseIssueInput!, $input1: AddProjectCardInput!) {
//!   closeIssue0: closeIssue(input: $input0) { clientMutationId }
//!   addNote1: addProjectCard(input: $input1) { clientMutationId }
//! }
//! ```

use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::graphql::GraphqlRequest;
use crate::model::{ItemKind, SyncOperation};

/// One operation resolved to its GraphQL field.
struct Field {
    alias: &'static str,
    mutation: &'static str,
    input_type: &'static str,
    input: Value,
}

fn field_for(op: &SyncOperation) -> Result<Field> {
    let field = match op {
        SyncOperation::Reopen {
            kind: ItemKind::Issue,
            id,
        } => Field {
            alias: "reopenIssue",
            mutation: "reopenIssue",
            input_type: "ReopenIssueInput!",
            input: json!({ "issueId": id }),
        },
        SyncOperation::Close {
            kind: ItemKind::Issue,
            id,
        } => Field {
            alias: "closeIssue",
            mutation: "closeIssue",
            input_type: "CloseIssueInput!",
            input: json!({ "issueId": id }),
        },
        SyncOperation::Reopen {
            kind: ItemKind::PullRequest,
            id,
        } => Field {
            alias: "reopenPullRequest",
            mutation: "reopenPullRequest",
            input_type: "ReopenPullRequestInput!",
            input: json!({ "pullRequestId": id }),
        },
        SyncOperation::Close {
            kind: ItemKind::PullRequest,
            id,
        } => Field {
            alias: "closePullRequest",
            mutation: "closePullRequest",
            input_type: "ClosePullRequestInput!",
            input: json!({ "pullRequestId": id }),
        },
        SyncOperation::ArchiveNote { id } => Field {
            alias: "archiveNote",
            mutation: "updateProjectCard",
            input_type: "UpdateProjectCardInput!",
            input: json!({ "projectCardId": id, "isArchived": true }),
        },
        SyncOperation::CreateNote {
            column_id,
            title,
            body,
        } => Field {
            alias: "addNote",
            mutation: "addProjectCard",
            input_type: "AddProjectCardInput!",
            input: json!({ "projectColumnId": column_id, "note": note_text(title, body) }),
        },
        SyncOperation::Reopen {
            kind: ItemKind::NoteCard,
            ..
        }
        | SyncOperation::Close {
            kind: ItemKind::NoteCard,
            ..
        } => return Err(Error::UnknownOperation(op.to_string())),
    };
    Ok(field)
}

/// Text of a new note card: the title, then the body after a blank line.
pub fn note_text(title: &str, body: &str) -> String {
    if body.trim().is_empty() {
        title.to_string()
    } else {
        format!("{}\n\n{}", title, body)
    }
}

/// Compile operations into one mutation request.
///
/// Every operation is checked before anything is built, so an unknown one
/// fails the whole batch.
pub fn compile(operations: &[SyncOperation]) -> Result<GraphqlRequest> {
    let fields = operations
        .iter()
        .map(field_for)
        .collect::<Result<Vec<_>>>()?;

    let mut params = Vec::with_capacity(fields.len());
    let mut selections = Vec::with_capacity(fields.len());
    let mut variables = serde_json::Map::new();

    for (index, field) in fields.into_iter().enumerate() {
        let var = format!("input{}", index);
        params.push(format!("${}: {}", var, field.input_type));
        selections.push(format!(
            "  {}{}: {}(input: ${}) {{ clientMutationId }}",
            field.alias, index, field.mutation, var
        ));
        variables.insert(var, field.input);
    }

    let query = format!(
        "mutation({}) {{\n{}\n}}",
        params.join(", "),
        selections.join("\n")
    );
    Ok(GraphqlRequest { query, variables })
}

/// Check that a mutation response answered every operation.
///
/// A short or padded response leaves the outcome of each operation unknown,
/// so any mismatch is an error.
pub fn verify_response(expected: usize, data: &Value) -> Result<()> {
    let actual = data.as_object().map_or(0, |o| o.len());
    if actual != expected {
        return Err(Error::ProtocolMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
#[path = "mutation_tests.rs"]
mod tests;
