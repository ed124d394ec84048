// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project board query and normalization.
//!
//! The board is read with a single GraphQL query. The owner field is always
//! aliased to `root`, so the response has the same shape whatever the
//! [`OwnerScope`] is, and normalization does not need to know which one was
//! asked for.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::graphql::GraphqlRequest;
use crate::model::{Board, BoardItem, Column, ItemKind, ItemState, Label};
use crate::text::split_first_line;

/// Maximum number of columns read from a project.
pub const COLUMN_PAGE_SIZE: u32 = 20;
/// Maximum number of cards read from each column.
pub const CARD_PAGE_SIZE: u32 = 100;
/// Maximum number of labels read for each issue or pull request.
pub const LABEL_PAGE_SIZE: u32 = 10;

/// Which kind of account owns the project.
///
/// Deserialization goes through [`FromStr`], so config files accept the
/// same spellings as the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OwnerScope {
    User,
    Organization,
    #[default]
    Repository,
}

impl OwnerScope {
    /// Returns the string representation used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            OwnerScope::User => "user",
            OwnerScope::Organization => "organization",
            OwnerScope::Repository => "repository",
        }
    }
}

impl TryFrom<String> for OwnerScope {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for OwnerScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OwnerScope {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "user" | "users" => Ok(OwnerScope::User),
            "org" | "orgs" | "organization" => Ok(OwnerScope::Organization),
            "repo" | "repository" => Ok(OwnerScope::Repository),
            _ => Err(Error::InvalidScope(s.to_string())),
        }
    }
}

/// The account or repository a project lives under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardTarget {
    User { login: String },
    Organization { login: String },
    Repository { owner: String, name: String },
}

impl BoardTarget {
    /// Resolve a scope and its names into a target.
    ///
    /// User and organization projects are addressed by `owner` alone.
    pub fn from_scope(scope: OwnerScope, owner: &str, repo: Option<&str>) -> Result<Self> {
        match scope {
            OwnerScope::User => Ok(BoardTarget::User {
                login: owner.to_string(),
            }),
            OwnerScope::Organization => Ok(BoardTarget::Organization {
                login: owner.to_string(),
            }),
            OwnerScope::Repository => {
                let name = repo
                    .filter(|r| !r.trim().is_empty())
                    .ok_or(Error::MissingRepository)?;
                Ok(BoardTarget::Repository {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
        }
    }

    pub fn scope(&self) -> OwnerScope {
        match self {
            BoardTarget::User { .. } => OwnerScope::User,
            BoardTarget::Organization { .. } => OwnerScope::Organization,
            BoardTarget::Repository { .. } => OwnerScope::Repository,
        }
    }
}

impl fmt::Display for BoardTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardTarget::User { login } => write!(f, "user {}", login),
            BoardTarget::Organization { login } => write!(f, "organization {}", login),
            BoardTarget::Repository { owner, name } => {
                write!(f, "repository {}/{}", owner, name)
            }
        }
    }
}

fn project_selection() -> String {
    let content_fields = format!(
        "id title url body labels(first: {LABEL_PAGE_SIZE}) {{ nodes {{ name description }} }}"
    );
    format!(
        "project(number: $number) {{
      name
      columns(first: {COLUMN_PAGE_SIZE}) {{
        nodes {{
          id
          name
          cards(first: {CARD_PAGE_SIZE}, archivedStates: NOT_ARCHIVED) {{
            nodes {{
              __typename
              id
              note
              url
              isArchived
              content {{
                __typename
                ... on Issue {{ {content_fields} issueState: state }}
                ... on PullRequest {{ {content_fields} pullRequestState: state }}
              }}
            }}
          }}
        }}
      }}
    }}"
    )
}

/// Build the read query for a project board.
pub fn board_query(target: &BoardTarget, number: u64) -> GraphqlRequest {
    let selection = project_selection();
    let request = match target {
        BoardTarget::User { login } => GraphqlRequest::new(format!(
            "query($login: String!, $number: Int!) {{\n  root: user(login: $login) {{\n    {selection}\n  }}\n}}"
        ))
        .variable("login", login.as_str()),
        BoardTarget::Organization { login } => GraphqlRequest::new(format!(
            "query($login: String!, $number: Int!) {{\n  root: organization(login: $login) {{\n    {selection}\n  }}\n}}"
        ))
        .variable("login", login.as_str()),
        BoardTarget::Repository { owner, name } => GraphqlRequest::new(format!(
            "query($owner: String!, $name: String!, $number: Int!) {{\n  root: repository(owner: $owner, name: $name) {{\n    {selection}\n  }}\n}}"
        ))
        .variable("owner", owner.as_str())
        .variable("name", name.as_str()),
    };
    request.variable("number", number)
}

// Response shapes. Every connection node may be null when the token cannot
// see it, so nodes are `Option`s throughout.

#[derive(Deserialize)]
struct RawData {
    root: Option<RawRoot>,
}

#[derive(Deserialize)]
struct RawRoot {
    project: Option<RawProject>,
}

#[derive(Deserialize)]
struct RawProject {
    name: String,
    columns: RawNodes<RawColumn>,
}

#[derive(Deserialize)]
struct RawNodes<T> {
    nodes: Option<Vec<Option<T>>>,
}

impl<T> RawNodes<T> {
    fn into_nodes(self) -> impl Iterator<Item = T> {
        self.nodes.unwrap_or_default().into_iter().flatten()
    }
}

#[derive(Deserialize)]
struct RawColumn {
    id: String,
    name: String,
    cards: Option<RawNodes<RawCard>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCard {
    id: String,
    note: Option<String>,
    url: Option<String>,
    #[serde(default)]
    is_archived: bool,
    content: Option<RawContent>,
}

#[derive(Deserialize)]
struct RawContent {
    #[serde(rename = "__typename")]
    typename: String,
    id: String,
    title: String,
    url: Option<String>,
    body: Option<String>,
    labels: Option<RawNodes<RawLabel>>,
    #[serde(rename = "issueState", alias = "pullRequestState")]
    state: Option<String>,
}

#[derive(Deserialize)]
struct RawLabel {
    name: String,
    description: Option<String>,
}

/// Normalize the `data` object of a board query response.
///
/// Note cards are dropped unless `includes_note` is set.
pub fn normalize(
    target: &BoardTarget,
    number: u64,
    data: Value,
    includes_note: bool,
) -> Result<Board> {
    let raw: RawData = serde_json::from_value(data)?;
    let project = raw
        .root
        .and_then(|root| root.project)
        .ok_or_else(|| Error::ProjectNotFound {
            target: target.to_string(),
            number,
        })?;

    let columns = project
        .columns
        .into_nodes()
        .map(|column| Column {
            id: column.id,
            name: column.name,
            items: column
                .cards
                .map(RawNodes::into_nodes)
                .into_iter()
                .flatten()
                .filter_map(normalize_card)
                .filter(|item| includes_note || item.kind != ItemKind::NoteCard)
                .collect(),
        })
        .collect();

    Ok(Board {
        name: project.name,
        columns,
    })
}

fn normalize_card(card: RawCard) -> Option<BoardItem> {
    if let Some(content) = card.content {
        return normalize_content(content);
    }
    match card.note {
        Some(note) if !note.trim().is_empty() => {
            let (title, body) = split_first_line(&note);
            Some(BoardItem {
                kind: ItemKind::NoteCard,
                id: card.id,
                title,
                url: card.url,
                body,
                labels: Vec::new(),
                state: if card.is_archived {
                    ItemState::Closed
                } else {
                    ItemState::Open
                },
            })
        }
        _ => {
            tracing::debug!(card = %card.id, "skipping card without note or visible content");
            None
        }
    }
}

fn normalize_content(content: RawContent) -> Option<BoardItem> {
    let kind = match content.typename.as_str() {
        "Issue" => ItemKind::Issue,
        "PullRequest" => ItemKind::PullRequest,
        other => {
            tracing::debug!(typename = other, id = %content.id, "skipping unsupported card content");
            return None;
        }
    };
    let state = match content.state.as_deref() {
        Some("CLOSED") | Some("MERGED") => ItemState::Closed,
        _ => ItemState::Open,
    };
    Some(BoardItem {
        kind,
        id: content.id,
        title: content.title,
        url: content.url,
        body: content.body.filter(|b| !b.is_empty()),
        labels: content
            .labels
            .map(|labels| {
                labels
                    .into_nodes()
                    .map(|l| Label {
                        name: l.name,
                        description: l.description.filter(|d| !d.is_empty()),
                    })
                    .collect()
            })
            .unwrap_or_default(),
        state,
    })
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
