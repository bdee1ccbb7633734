// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Static registry of blockchain networks supported by the Covalent API
//!
//! This crate provides the process-wide, read-only mapping from numeric
//! chain identifiers to the Covalent chain slug and display name. Lookups
//! for unknown chains fail loudly; there is no default chain.

pub mod network;

pub use network::{Network, UnknownChainError};
