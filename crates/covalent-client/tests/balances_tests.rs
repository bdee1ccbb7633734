// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests for the `balances_v2` endpoint
//!
//! These tests use wiremock to mock the Covalent API and verify query
//! construction and response decoding end to end.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use covalent_client::{CovalentError, DecodeError};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

use fixtures::*;

#[tokio::test]
async fn token_balances_success() {
    let mock_server = MockServer::start().await;

    let body = envelope(json!({
        "address": "0xD8dA6BF26964aF9D7eEd9e03E53415D37aA96045",
        "chain_id": "eth-mainnet",
        "items": [usdc_balance_item()]
    }));

    Mock::given(method("GET"))
        .and(path(endpoint_path("eth-mainnet", TEST_ACCOUNT, "balances_v2")))
        .and(query_param("key", "test-api-key"))
        .and(query_param("quote-currency", "USD"))
        .and(query_param("format", "JSON"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = create_client(mock_server.uri(), 1);
    let result = client.token_balances(TEST_ACCOUNT).await.unwrap();

    assert_eq!(result.account, TEST_ACCOUNT);
    assert_eq!(result.chain_id, "eth-mainnet");
    assert_eq!(result.token_balances.len(), 1);

    let balance = &result.token_balances[0];
    assert_eq!(balance.token.symbol, "USDC");
    assert_eq!(balance.token.decimals, 6);
    assert_eq!(balance.balance, BigDecimal::from_str("5.0").unwrap());
    assert_eq!(balance.quote, Some(BigDecimal::from_str("5.0").unwrap()));
    assert_eq!(balance.quote_rate, Some(BigDecimal::from_str("1.0").unwrap()));
}

#[tokio::test]
async fn token_balances_routes_through_chain_slug() {
    let mock_server = MockServer::start().await;

    let body = envelope(json!({
        "address": TEST_ACCOUNT,
        "chain_id": "matic-mainnet",
        "items": []
    }));

    Mock::given(method("GET"))
        .and(path(endpoint_path("matic-mainnet", TEST_ACCOUNT, "balances_v2")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = create_client(mock_server.uri(), 137);
    let result = client.token_balances(TEST_ACCOUNT).await.unwrap();

    assert_eq!(result.chain_id, "matic-mainnet");
    assert!(result.token_balances.is_empty());
}

#[tokio::test]
async fn token_balances_missing_required_field_fails() {
    let mock_server = MockServer::start().await;

    let mut item = usdc_balance_item();
    item.as_object_mut().unwrap().remove("contract_name");
    let body = envelope(json!({
        "address": TEST_ACCOUNT,
        "chain_id": "eth-mainnet",
        "items": [item]
    }));

    Mock::given(method("GET"))
        .and(path(endpoint_path("eth-mainnet", TEST_ACCOUNT, "balances_v2")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = create_client(mock_server.uri(), 1);
    let result = client.token_balances(TEST_ACCOUNT).await;

    match result.unwrap_err() {
        CovalentError::Decode(DecodeError::MissingField("contract_name")) => {}
        other => panic!("expected MissingField error, got: {other:?}"),
    }
}

#[tokio::test]
async fn token_balances_server_error_surfaces_status_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(endpoint_path("eth-mainnet", TEST_ACCOUNT, "balances_v2")))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = create_client(mock_server.uri(), 1);
    let result = client.token_balances(TEST_ACCOUNT).await;

    match result.unwrap_err() {
        CovalentError::Transport(message) => {
            assert_eq!(message, "Internal Server Error");
        }
        other => panic!("expected Transport error, got: {other:?}"),
    }
}

#[tokio::test]
async fn token_balances_empty_body_is_a_transport_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(endpoint_path("eth-mainnet", TEST_ACCOUNT, "balances_v2")))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = create_client(mock_server.uri(), 1);
    let result = client.token_balances(TEST_ACCOUNT).await;

    match result.unwrap_err() {
        CovalentError::Transport(message) => {
            assert_eq!(message, "An error occurred while fetching data");
        }
        other => panic!("expected Transport error, got: {other:?}"),
    }
}

#[tokio::test]
async fn token_balances_unparseable_body_is_invalid_shape() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(endpoint_path("eth-mainnet", TEST_ACCOUNT, "balances_v2")))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = create_client(mock_server.uri(), 1);
    let result = client.token_balances(TEST_ACCOUNT).await;

    match result.unwrap_err() {
        CovalentError::Decode(DecodeError::InvalidResponseShape(_)) => {}
        other => panic!("expected InvalidResponseShape error, got: {other:?}"),
    }
}

#[tokio::test]
async fn token_balances_missing_items_is_invalid_shape() {
    let mock_server = MockServer::start().await;

    let body = envelope(json!({
        "address": TEST_ACCOUNT,
        "chain_id": "eth-mainnet"
    }));

    Mock::given(method("GET"))
        .and(path(endpoint_path("eth-mainnet", TEST_ACCOUNT, "balances_v2")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = create_client(mock_server.uri(), 1);
    let result = client.token_balances(TEST_ACCOUNT).await;

    match result.unwrap_err() {
        CovalentError::Decode(DecodeError::InvalidResponseShape(message)) => {
            assert!(message.contains("items"));
        }
        other => panic!("expected InvalidResponseShape error, got: {other:?}"),
    }
}
