// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! GraphQL request envelope.
//!
//! Queries and mutations are always sent with bound variables; values are
//! never spliced into the document text.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A GraphQL document plus its variables, serialized as the HTTP body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlRequest {
    pub query: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub variables: Map<String, Value>,
}

impl GraphqlRequest {
    pub fn new(query: impl Into<String>) -> Self {
        GraphqlRequest {
            query: query.into(),
            variables: Map::new(),
        }
    }

    /// Bind a variable, replacing any previous value.
    pub fn variable(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.variables.insert(name.to_string(), value.into());
        self
    }

    /// Returns true if the document is a mutation.
    pub fn is_mutation(&self) -> bool {
        self.query.trim_start().starts_with("mutation")
    }
}
