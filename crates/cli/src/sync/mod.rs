// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Remote board access.
//!
//! ```text
//! ┌─────────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  BoardClient    │────►│  Transport  │────►│   GitHub    │
//! │ MutationBatcher │◄────│   (trait)   │◄────│   GraphQL   │
//! └─────────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! One read per sync and at most one write. There is no retry, backoff or
//! timeout layer; transport errors propagate to the command.

mod batch;
mod client;
mod transport;

pub use batch::MutationBatcher;
pub use client::BoardClient;
pub use transport::{
    extract_data, GraphqlErrorEntry, GraphqlResponse, GraphqlTransport, HttpTransport,
    TransportError, TransportResult,
};
