// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Covalent endpoint operations
//!
//! Each call runs the same sequence: resolve the active chain, build the
//! request, await the transport, validate the response, decode. There is
//! no state shared between calls, no caching, and no retrying; every
//! failure surfaces to the caller as-is.

use std::time::Duration;

use chain_registry::Network;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::{
    chain_source::ChainIdSource,
    config::CovalentConfig,
    decode,
    error::{CovalentError, DecodeError},
    models::{TokenBalancesList, TransactionsList, TransfersList},
    query::{RequestOptions, build_url, global_params},
};

const GENERIC_FETCH_ERROR: &str = "An error occurred while fetching data";

/// Covalent API client
#[derive(Debug)]
pub struct CovalentClient<S> {
    client: Client,
    config: CovalentConfig,
    chain_source: S,
}

impl<S: ChainIdSource> CovalentClient<S> {
    /// Create a new Covalent API client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created or the
    /// configuration is invalid
    pub fn new(config: CovalentConfig, chain_source: S) -> Result<Self, CovalentError> {
        if config.api_key.trim().is_empty() {
            return Err(CovalentError::Config("API key cannot be empty".to_string()));
        }

        if config.base_url.trim().is_empty() {
            return Err(CovalentError::Config("Base URL cannot be empty".to_string()));
        }

        let client = Client::builder()
            .user_agent("covalent-api/0.1.0")
            .build()
            .map_err(CovalentError::Http)?;

        Ok(Self {
            client,
            config,
            chain_source,
        })
    }

    /// Get all token balances held by `account` on the active chain
    ///
    /// # Errors
    ///
    /// Returns an error if the chain cannot be resolved, the request
    /// fails, or the response cannot be decoded
    pub async fn token_balances(&self, account: &str) -> Result<TokenBalancesList, CovalentError> {
        let network = self.resolve_network().await?;
        let url = build_url([
            self.config.base_url.as_str(),
            "v1",
            network.slug(),
            "address",
            account,
            "balances_v2",
        ]);
        let params = global_params(
            &self.config.api_key,
            &self.config.quote_currency,
            self.config.format,
        );

        let body = self.fetch(&url, &params).await?;
        Ok(decode::decode_token_balances(&parse_body(&body)?)?)
    }

    /// Get transactions involving `account` on the active chain
    ///
    /// # Errors
    ///
    /// Returns an error if the chain cannot be resolved, the request
    /// fails, or the response cannot be decoded
    pub async fn transactions(
        &self,
        account: &str,
        options: Option<&RequestOptions>,
    ) -> Result<TransactionsList, CovalentError> {
        let network = self.resolve_network().await?;
        let url = build_url([
            self.config.base_url.as_str(),
            "v1",
            network.slug(),
            "address",
            account,
            "transactions_v2",
        ]);
        let mut params = global_params(
            &self.config.api_key,
            &self.config.quote_currency,
            self.config.format,
        );
        if let Some(options) = options {
            options.apply(&mut params);
        }

        let body = self.fetch(&url, &params).await?;
        Ok(decode::decode_transactions_list(&parse_body(&body)?)?)
    }

    /// Get transfers of `token_address` involving `account` on the
    /// active chain, grouped by transaction
    ///
    /// # Errors
    ///
    /// Returns an error if the chain cannot be resolved, the request
    /// fails, or the response cannot be decoded
    pub async fn token_transfers(
        &self,
        account: &str,
        token_address: &str,
        options: Option<&RequestOptions>,
    ) -> Result<TransfersList, CovalentError> {
        let network = self.resolve_network().await?;
        let url = build_url([
            self.config.base_url.as_str(),
            "v1",
            network.slug(),
            "address",
            account,
            "transfers_v2",
        ]);
        let mut params = global_params(
            &self.config.api_key,
            &self.config.quote_currency,
            self.config.format,
        );
        params.push(("contract-address".to_string(), token_address.to_string()));
        if let Some(options) = options {
            options.apply(&mut params);
        }

        let body = self.fetch(&url, &params).await?;
        Ok(decode::decode_transfers_list(&parse_body(&body)?)?)
    }

    async fn resolve_network(&self) -> Result<Network, CovalentError> {
        let chain_id = self.chain_source.active_chain_id().await?;
        let network = Network::try_from(chain_id)?;
        debug!(chain_id, slug = network.slug(), "resolved active network");
        Ok(network)
    }

    async fn fetch(&self, url: &str, params: &[(String, String)]) -> Result<String, CovalentError> {
        debug!(url, "fetching data from Covalent");

        let request = self.client.get(url).query(params);
        let response = match self.config.timeout_seconds {
            Some(seconds) => timeout(Duration::from_secs(seconds), request.send())
                .await
                .map_err(|_| {
                    CovalentError::Transport(format!("request timed out after {seconds} seconds"))
                })?
                .map_err(CovalentError::Http)?,
            None => request.send().await.map_err(CovalentError::Http)?,
        };

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Covalent API error: {}", status.as_u16());
            let message = status
                .canonical_reason()
                .map_or_else(|| GENERIC_FETCH_ERROR.to_string(), ToString::to_string);
            return Err(CovalentError::Transport(message));
        }

        let body = response.text().await.map_err(CovalentError::Http)?;
        if body.is_empty() {
            return Err(CovalentError::Transport(GENERIC_FETCH_ERROR.to_string()));
        }

        Ok(body)
    }
}

fn parse_body(body: &str) -> Result<Value, DecodeError> {
    serde_json::from_str(body).map_err(|e| DecodeError::InvalidResponseShape(e.to_string()))
}
