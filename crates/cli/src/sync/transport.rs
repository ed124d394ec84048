// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transport abstraction for GraphQL requests.
//!
//! Provides a trait-based transport layer that enables:
//! - Real HTTP requests against the GitHub GraphQL API for production
//! - Mock transports for unit testing

use std::future::Future;
use std::pin::Pin;

use serde::Deserialize;
use serde_json::Value;
use tb_core::GraphqlRequest;

/// Error type for transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request could not be sent or the body could not be read.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("api returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The response carried errors and no data.
    #[error("graphql error: {}", .0.join("; "))]
    Graphql(Vec<String>),

    /// The response carried neither data nor errors.
    #[error("response has no data")]
    MissingData,
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Transport trait for GraphQL communication.
///
/// This trait abstracts over the actual transport mechanism, allowing
/// for easy testing with mock implementations.
pub trait GraphqlTransport: Send + Sync {
    /// Execute a request and return the `data` object of the response.
    fn execute(
        &self,
        request: GraphqlRequest,
    ) -> Pin<Box<dyn Future<Output = TransportResult<Value>> + Send + '_>>;
}

impl<T: GraphqlTransport + ?Sized> GraphqlTransport for &T {
    fn execute(
        &self,
        request: GraphqlRequest,
    ) -> Pin<Box<dyn Future<Output = TransportResult<Value>> + Send + '_>> {
        (**self).execute(request)
    }
}

const USER_AGENT: &str = concat!("todoboard/", env!("CARGO_PKG_VERSION"));

/// HTTP transport implementation using reqwest.
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        HttpTransport {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl GraphqlTransport for HttpTransport {
    fn execute(
        &self,
        request: GraphqlRequest,
    ) -> Pin<Box<dyn Future<Output = TransportResult<Value>> + Send + '_>> {
        Box::pin(async move {
            tracing::debug!(
                endpoint = %self.endpoint,
                mutation = request.is_mutation(),
                variables = request.variables.len(),
                "sending graphql request"
            );
            let resp = self
                .client
                .post(&self.endpoint)
                .header("Authorization", format!("bearer {}", self.token))
                .header("User-Agent", USER_AGENT)
                .header("GraphQL-Features", "projects_next_graphql")
                .json(&request)
                .send()
                .await?;

            if !resp.status().is_success() {
                let status = resp.status().as_u16();
                let message = resp.text().await.unwrap_or_default();
                return Err(TransportError::Api { status, message });
            }

            let body: GraphqlResponse = resp.json().await?;
            extract_data(body)
        })
    }
}

/// Body of a GraphQL response.
#[derive(Debug, Default, Deserialize)]
pub struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphqlErrorEntry>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlErrorEntry {
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Pick the `data` object out of a response.
///
/// Data wins over errors: GitHub reports a missing project as a null field
/// plus a `NOT_FOUND` error, and the caller turns the null into a proper
/// not-found error.
pub fn extract_data(body: GraphqlResponse) -> TransportResult<Value> {
    match body.data {
        Some(data) if !data.is_null() => {
            for error in &body.errors {
                tracing::warn!(
                    kind = error.kind.as_deref().unwrap_or("unknown"),
                    "graphql: {}",
                    error.message
                );
            }
            Ok(data)
        }
        _ if !body.errors.is_empty() => Err(TransportError::Graphql(
            body.errors.into_iter().map(|e| e.message).collect(),
        )),
        _ => Err(TransportError::MissingData),
    }
}
