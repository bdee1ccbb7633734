// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Seam for resolving the caller's active chain
//!
//! Endpoint operations do not assume where the chain id comes from; a
//! wallet connection, an RPC node, or static configuration can all back
//! this trait. A failure here is fatal to the operation and aborts it
//! before any HTTP request is issued.

use crate::error::CovalentError;

/// Source of the caller's current numeric chain id
pub trait ChainIdSource: Send + Sync {
    /// Returns the active numeric chain id.
    ///
    /// # Errors
    ///
    /// Returns an error if the chain id cannot be determined
    fn active_chain_id(&self) -> impl Future<Output = Result<u64, CovalentError>> + Send;
}

/// A fixed chain id, for callers that already know their chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticChainId(pub u64);

impl ChainIdSource for StaticChainId {
    async fn active_chain_id(&self) -> Result<u64, CovalentError> {
        Ok(self.0)
    }
}
