// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Covalent API client for blockchain token data
//!
//! This crate builds authenticated queries against the Covalent indexing
//! service and maps its partially-nullable JSON payloads into a strict
//! typed domain model: token balances, transactions with event logs, and
//! token transfers grouped by transaction.
//!
//! # Architecture
//!
//! - **Query Construction**: [`query`] - URL assembly and request parameters
//! - **Field Access**: [`json`] - null-aware typed accessors over JSON trees
//! - **Domain Decoding**: [`decode`] - all-or-nothing record decoders
//! - **Endpoint Operations**: [`client::CovalentClient`] - the three calls
//! - **Chain Resolution**: [`chain_source::ChainIdSource`] - active-chain seam
//!
//! # Features
//!
//! - **Exact Decimal Arithmetic**: balances are scaled by token decimals in
//!   arbitrary-precision `BigDecimal` arithmetic, never floating point
//! - **Strict Null Handling**: required fields fail loudly, nullable fields
//!   surface an explicit empty value rather than a sentinel
//! - **No Hidden Policy**: no caching, no retries, no pagination traversal;
//!   every call resolves the chain and fetches exactly once
//! - **Testing Support**: comprehensive test coverage using wiremock for
//!   HTTP simulation

pub mod chain_source;
pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod json;
pub mod models;
pub mod query;

pub use chain_source::{ChainIdSource, StaticChainId};
pub use client::CovalentClient;
pub use config::{CovalentConfig, DataFormat};
pub use error::{CovalentError, DecodeError};
pub use models::*;
pub use query::{BlockRangeOptions, PaginationOptions, RequestOptions};
