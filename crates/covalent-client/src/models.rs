// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Domain records decoded from Covalent responses
//!
//! All records are immutable value objects constructed once per decode.
//! Field order within the list types mirrors the provider response order,
//! which is not guaranteed to be sorted.

use bigdecimal::BigDecimal;
use serde::Serialize;

/// An ERC-20 style token as described by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Contract address, lowercase hex
    pub address: String,
    /// Contract name
    pub name: String,
    /// Ticker symbol
    pub symbol: String,
    /// Number of decimals the raw integer balance is scaled by
    pub decimals: u32,
    /// Logo URL, when the provider has one
    pub logo_url: Option<String>,
}

/// A token position held by the queried account
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenBalance {
    /// The token this balance is denominated in
    pub token: Token,
    /// Balance already divided by `10^decimals`, exact
    pub balance: BigDecimal,
    /// Fiat value of the position, when quoted
    pub quote: Option<BigDecimal>,
    /// Fiat price per token, when quoted
    pub quote_rate: Option<BigDecimal>,
}

/// Token balances for one account on one chain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenBalancesList {
    /// Queried account address, lowercase
    pub account: String,
    /// Provider chain slug the response was served for
    pub chain_id: String,
    /// Balances in provider response order
    pub token_balances: Vec<TokenBalance>,
}

/// Pagination metadata; every field is independently nullable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Total number of items across all pages
    pub total: Option<i64>,
    /// Page size used by the provider
    pub per_page: Option<i64>,
    /// Page number of this response
    pub page: Option<i64>,
    /// Whether further pages exist
    pub has_more: Option<bool>,
}

/// Gas accounting for a transaction; present whenever the transaction is
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GasInfo {
    /// Gas offered by the sender
    pub offered: String,
    /// Gas actually spent
    pub spent: String,
    /// Gas price
    pub price: String,
    /// Fiat rate applied to the gas cost
    pub quote_rate: String,
    /// Fiat value of the gas cost
    pub quote: String,
}

/// One decoded parameter of an emitted event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventParam {
    /// Parameter name
    pub name: String,
    /// Solidity type tag; opaque to this layer
    pub kind: String,
    /// Whether the parameter was indexed
    pub indexed: bool,
    /// Whether the provider managed to decode the value
    pub decoded: bool,
    /// String-encoded value
    pub value: String,
}

/// A decoded event emitted by a contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    /// Event name
    pub name: String,
    /// Full event signature
    pub signature: String,
    /// Decoded parameters, possibly empty
    pub params: Vec<EventParam>,
}

/// One log entry attached to a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventLog {
    /// Address of the emitting contract
    pub contract_address: String,
    /// Offset of this log within the block
    pub log_offset: i64,
    /// Raw log topics
    pub topics: Vec<String>,
    /// Raw log data
    pub data: String,
    /// The decoded event; always present on a well-formed log
    pub event: Event,
}

/// A transaction involving the queried account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Transaction hash
    pub hash: String,
    /// Sender address
    pub from: String,
    /// Recipient address
    pub to: String,
    /// Whether the transaction succeeded
    pub successful: bool,
    /// Native value moved, decimal-as-string
    pub value: String,
    /// Fiat value moved, decimal-as-string
    pub quote: String,
    /// Block timestamp, ISO 8601
    pub timestamp: String,
    /// Height of the containing block
    pub block_height: i64,
    /// Offset of the transaction within the block
    pub offset: Option<i64>,
    /// Gas accounting
    pub gas_info: GasInfo,
    /// Event logs, possibly empty, never null
    pub logs: Vec<EventLog>,
}

/// Direction of a token transfer relative to the queried account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransferType {
    /// Tokens flowed into the account
    In,
    /// Tokens flowed out of the account
    Out,
}

/// One token transfer within a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transfer {
    /// The transferred token
    pub token: Token,
    /// Sender address
    pub from: String,
    /// Recipient address
    pub to: String,
    /// Raw amount moved (delta), decimal-as-string
    pub value: String,
    /// Fiat value of the delta, decimal-as-string
    pub quote: String,
    /// Fiat price per token, decimal-as-string
    pub quote_rate: String,
    /// Direction relative to the queried account
    pub kind: TransferType,
}

/// A transaction with the token transfers it carried
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransfersPerTx {
    /// The owning transaction
    pub transaction: Transaction,
    /// Transfers in provider response order, possibly empty
    pub transfers: Vec<Transfer>,
}

/// Transactions for one account on one chain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionsList {
    /// Queried account address
    pub account: String,
    /// Provider chain slug the response was served for
    pub chain_id: String,
    /// Quote currency fiat values are denominated in
    pub quote_currency: String,
    /// Transactions in provider response order
    pub transactions: Vec<Transaction>,
    /// Pagination metadata; absent when the provider sent none
    pub pagination: Option<Pagination>,
    /// When the provider last refreshed this data
    pub updated_at: Option<String>,
    /// When the provider will next refresh this data
    pub next_update_at: Option<String>,
}

/// Token transfers for one account and token on one chain, grouped by
/// transaction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransfersList {
    /// Queried account address
    pub account: String,
    /// Provider chain slug the response was served for
    pub chain_id: String,
    /// Quote currency fiat values are denominated in
    pub quote_currency: String,
    /// Transfers grouped by their transaction, provider response order
    pub transfers: Vec<TransfersPerTx>,
    /// Pagination metadata; absent when the provider sent none
    pub pagination: Option<Pagination>,
    /// When the provider last refreshed this data
    pub updated_at: String,
    /// When the provider will next refresh this data
    pub next_update_at: String,
}
