// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Decoders from Covalent JSON payloads into domain records
//!
//! Decoding is all-or-nothing per record: a missing required field aborts
//! the whole record and propagates to the owning endpoint operation, so a
//! caller never sees a partially-populated result. The one deliberate
//! fallback is for list fields (`items` on the paged endpoints,
//! `log_events`, `transfers`, `params`, topics): the provider omits these
//! arrays when there is nothing to report, so absence maps to an empty
//! sequence instead of an error.

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use serde_json::Value;

use crate::{
    error::DecodeError,
    json::{
        JsonObject, nullable_array, nullable_bool, nullable_decimal, nullable_int,
        nullable_object, nullable_str, required_array, required_bool, required_decimal,
        required_int, required_object, required_str,
    },
    models::{
        Event, EventLog, EventParam, GasInfo, Pagination, Token, TokenBalance,
        TokenBalancesList, Transaction, TransactionsList, Transfer, TransferType,
        TransfersList, TransfersPerTx,
    },
};

/// Parses a response body into the `data` envelope object. A body that is
/// not a JSON object, or whose `data` member is missing or not an object,
/// has an invalid shape.
pub fn response_data(root: &Value) -> Result<&JsonObject, DecodeError> {
    let root = root
        .as_object()
        .ok_or_else(|| DecodeError::InvalidResponseShape("response is not a JSON object".into()))?;
    match root.get("data") {
        Some(Value::Object(data)) => Ok(data),
        _ => Err(DecodeError::InvalidResponseShape(
            "missing `data` object".into(),
        )),
    }
}

fn item_object<'a>(value: &'a Value, field: &'static str) -> Result<&'a JsonObject, DecodeError> {
    value
        .as_object()
        .ok_or(DecodeError::WrongFieldType(field))
}

fn decimals_of(obj: &JsonObject) -> Result<u32, DecodeError> {
    let raw = required_int(obj, "contract_decimals")?;
    u32::try_from(raw).map_err(|_| DecodeError::WrongFieldType("contract_decimals"))
}

/// Decodes the token description embedded in balance and transfer items.
pub fn decode_token(obj: &JsonObject) -> Result<Token, DecodeError> {
    Ok(Token {
        address: required_str(obj, "contract_address")?,
        name: required_str(obj, "contract_name")?,
        symbol: required_str(obj, "contract_ticker_symbol")?,
        decimals: decimals_of(obj)?,
        logo_url: nullable_str(obj, "logo_url"),
    })
}

/// Scales a raw integer balance down by `10^decimals`. Multiplying by
/// `10^-decimals` keeps the result exact for any number of decimals.
fn scale_balance(raw: BigDecimal, decimals: u32) -> BigDecimal {
    raw * BigDecimal::new(BigInt::from(1), i64::from(decimals))
}

/// Decodes one balance item, scaling the raw balance by the token's own
/// decimals.
pub fn decode_token_balance(obj: &JsonObject) -> Result<TokenBalance, DecodeError> {
    let token = decode_token(obj)?;
    let raw = required_decimal(obj, "balance")?;
    let balance = scale_balance(raw, token.decimals);
    Ok(TokenBalance {
        token,
        balance,
        quote: nullable_decimal(obj, "quote")?,
        quote_rate: nullable_decimal(obj, "quote_rate")?,
    })
}

/// Decodes the pagination block; a missing pagination object yields
/// `None`, not a zero-valued one.
pub fn decode_pagination(obj: Option<&JsonObject>) -> Option<Pagination> {
    obj.map(|obj| Pagination {
        total: nullable_int(obj, "total_count"),
        per_page: nullable_int(obj, "page_size"),
        page: nullable_int(obj, "page_number"),
        has_more: nullable_bool(obj, "has_more"),
    })
}

fn decode_event_param(obj: &JsonObject) -> Result<EventParam, DecodeError> {
    Ok(EventParam {
        name: required_str(obj, "name")?,
        kind: required_str(obj, "type")?,
        indexed: required_bool(obj, "indexed")?,
        decoded: required_bool(obj, "decoded")?,
        value: required_str(obj, "value")?,
    })
}

fn decode_event_params(values: Option<&Vec<Value>>) -> Result<Vec<EventParam>, DecodeError> {
    values.map_or_else(
        || Ok(Vec::new()),
        |items| {
            items
                .iter()
                .map(|v| decode_event_param(item_object(v, "params")?))
                .collect()
        },
    )
}

fn decode_event(obj: &JsonObject) -> Result<Event, DecodeError> {
    Ok(Event {
        name: required_str(obj, "name")?,
        signature: required_str(obj, "signature")?,
        params: decode_event_params(nullable_array(obj, "params"))?,
    })
}

fn decode_topics(values: &[Value]) -> Result<Vec<String>, DecodeError> {
    values
        .iter()
        .map(|v| {
            v.as_str()
                .map(ToString::to_string)
                .ok_or(DecodeError::WrongFieldType("raw_log_topics"))
        })
        .collect()
}

/// Decodes one event log. The decoded event is required; a log without
/// one is an error.
pub fn decode_event_log(obj: &JsonObject) -> Result<EventLog, DecodeError> {
    Ok(EventLog {
        contract_address: required_str(obj, "sender_address")?,
        log_offset: required_int(obj, "log_offset")?,
        topics: decode_topics(required_array(obj, "raw_log_topics")?)?,
        data: required_str(obj, "raw_log_data")?,
        event: decode_event(required_object(obj, "decoded")?)?,
    })
}

fn decode_event_logs(values: Option<&Vec<Value>>) -> Result<Vec<EventLog>, DecodeError> {
    values.map_or_else(
        || Ok(Vec::new()),
        |items| {
            items
                .iter()
                .map(|v| decode_event_log(item_object(v, "log_events")?))
                .collect()
        },
    )
}

/// Decodes one transaction with its gas info and event logs.
pub fn decode_transaction(obj: &JsonObject) -> Result<Transaction, DecodeError> {
    Ok(Transaction {
        hash: required_str(obj, "tx_hash")?,
        from: required_str(obj, "from_address")?,
        to: required_str(obj, "to_address")?,
        successful: required_bool(obj, "successful")?,
        value: required_str(obj, "value")?,
        quote: required_str(obj, "value_quote")?,
        timestamp: required_str(obj, "block_signed_at")?,
        block_height: required_int(obj, "block_height")?,
        offset: nullable_int(obj, "tx_offset"),
        gas_info: GasInfo {
            offered: required_str(obj, "gas_offered")?,
            spent: required_str(obj, "gas_spent")?,
            price: required_str(obj, "gas_price")?,
            quote_rate: required_str(obj, "gas_quote_rate")?,
            quote: required_str(obj, "gas_quote")?,
        },
        logs: decode_event_logs(nullable_array(obj, "log_events"))?,
    })
}

fn decode_transactions(values: Option<&Vec<Value>>) -> Result<Vec<Transaction>, DecodeError> {
    values.map_or_else(
        || Ok(Vec::new()),
        |items| {
            items
                .iter()
                .map(|v| decode_transaction(item_object(v, "items")?))
                .collect()
        },
    )
}

/// Parses the transfer direction tag; exactly `"IN"` or `"OUT"`.
pub fn parse_transfer_type(value: &str) -> Result<TransferType, DecodeError> {
    match value {
        "IN" => Ok(TransferType::In),
        "OUT" => Ok(TransferType::Out),
        other => Err(DecodeError::UnknownTransferType(other.to_string())),
    }
}

/// Decodes one token transfer.
pub fn decode_transfer(obj: &JsonObject) -> Result<Transfer, DecodeError> {
    Ok(Transfer {
        token: decode_token(obj)?,
        from: required_str(obj, "from_address")?,
        to: required_str(obj, "to_address")?,
        value: required_str(obj, "delta")?,
        quote: required_str(obj, "delta_quote")?,
        quote_rate: required_str(obj, "quote_rate")?,
        kind: parse_transfer_type(&required_str(obj, "transfer_type")?)?,
    })
}

fn decode_transfers(values: Option<&Vec<Value>>) -> Result<Vec<Transfer>, DecodeError> {
    values.map_or_else(
        || Ok(Vec::new()),
        |items| {
            items
                .iter()
                .map(|v| decode_transfer(item_object(v, "transfers")?))
                .collect()
        },
    )
}

/// Decodes a transaction together with the transfers it carried.
pub fn decode_transfers_per_tx(obj: &JsonObject) -> Result<TransfersPerTx, DecodeError> {
    Ok(TransfersPerTx {
        transaction: decode_transaction(obj)?,
        transfers: decode_transfers(nullable_array(obj, "transfers"))?,
    })
}

fn decode_transfers_per_txs(values: Option<&Vec<Value>>) -> Result<Vec<TransfersPerTx>, DecodeError> {
    values.map_or_else(
        || Ok(Vec::new()),
        |items| {
            items
                .iter()
                .map(|v| decode_transfers_per_tx(item_object(v, "items")?))
                .collect()
        },
    )
}

/// Decodes the `balances_v2` envelope. The provider cases the account
/// address inconsistently on this endpoint, so it is normalized to
/// lowercase here; all other addresses pass through verbatim.
pub fn decode_token_balances(root: &Value) -> Result<TokenBalancesList, DecodeError> {
    let data = response_data(root)?;
    let items = match data.get("items") {
        Some(Value::Array(items)) => items,
        _ => {
            return Err(DecodeError::InvalidResponseShape(
                "missing `items` array".into(),
            ));
        }
    };

    let token_balances = items
        .iter()
        .map(|v| decode_token_balance(item_object(v, "items")?))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(TokenBalancesList {
        account: required_str(data, "address")?.to_lowercase(),
        chain_id: required_str(data, "chain_id")?,
        token_balances,
    })
}

/// Decodes the `transactions_v2` envelope.
pub fn decode_transactions_list(root: &Value) -> Result<TransactionsList, DecodeError> {
    let data = response_data(root)?;
    Ok(TransactionsList {
        account: required_str(data, "address")?,
        chain_id: required_str(data, "chain_id")?,
        quote_currency: required_str(data, "quote_currency")?,
        transactions: decode_transactions(nullable_array(data, "items"))?,
        pagination: decode_pagination(nullable_object(data, "pagination")),
        updated_at: nullable_str(data, "updated_at"),
        next_update_at: nullable_str(data, "next_update_at"),
    })
}

/// Decodes the `transfers_v2` envelope.
pub fn decode_transfers_list(root: &Value) -> Result<TransfersList, DecodeError> {
    let data = response_data(root)?;
    Ok(TransfersList {
        account: required_str(data, "address")?,
        chain_id: required_str(data, "chain_id")?,
        quote_currency: required_str(data, "quote_currency")?,
        transfers: decode_transfers_per_txs(nullable_array(data, "items"))?,
        pagination: decode_pagination(nullable_object(data, "pagination")),
        updated_at: required_str(data, "updated_at")?,
        next_update_at: required_str(data, "next_update_at")?,
    })
}
