// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the Covalent client
//!
//! Decoding failures are kept in their own enum so the pure mapping layer
//! stays independent of the transport; [`CovalentError`] wraps everything
//! an endpoint operation can surface. All errors are terminal for the
//! current call; no retry or recovery happens at this layer.

use chain_registry::UnknownChainError;
use thiserror::Error;

/// Errors raised while mapping a JSON response into domain records
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum DecodeError {
    /// Response envelope is missing or has the wrong shape
    #[error("invalid response shape: {0}")]
    InvalidResponseShape(String),

    /// A required field is absent or null
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// A field is present but holds the wrong JSON kind
    #[error("field `{0}` has the wrong type")]
    WrongFieldType(&'static str),

    /// A monetary field does not parse as a decimal number
    #[error("invalid numeric literal `{literal}` in field `{field}`")]
    InvalidNumericLiteral {
        field: &'static str,
        literal: String,
    },

    /// Transfer direction was neither "IN" nor "OUT"
    #[error("unknown transfer type `{0}`")]
    UnknownTransferType(String),
}

/// Errors surfaced to callers of the endpoint operations
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum CovalentError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Data format tag not supported by the provider
    #[error("unsupported data format: {0}")]
    UnsupportedFormat(u8),

    /// Active chain is not in the registry
    #[error(transparent)]
    UnknownChain(#[from] UnknownChainError),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned a non-success status or an empty body
    #[error("transport failure: {0}")]
    Transport(String),

    /// Response mapping failed
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Client independent error
    #[error(transparent)]
    Custom(#[from] anyhow::Error),
}
