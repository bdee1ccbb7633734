// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for the Covalent API client

use std::{fmt, str::FromStr};

use crate::error::CovalentError;

/// Base URL of the Covalent API
pub const COVALENT_API: &str = "https://api.covalenthq.com";

/// Response format requested from the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataFormat {
    /// JSON response body
    #[default]
    Json,
    /// CSV response body
    Csv,
}

impl DataFormat {
    /// Returns the provider's string tag for this format
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Csv => "CSV",
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for DataFormat {
    type Error = CovalentError;

    /// Maps the provider's numeric format tag (0 = JSON, 1 = CSV)
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Json),
            1 => Ok(Self::Csv),
            other => Err(CovalentError::UnsupportedFormat(other)),
        }
    }
}

impl FromStr for DataFormat {
    type Err = CovalentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "JSON" => Ok(Self::Json),
            "CSV" => Ok(Self::Csv),
            _ => Err(CovalentError::Config(format!("unknown data format: {s}"))),
        }
    }
}

/// Configuration for the Covalent API client
#[derive(Debug, Clone)]
pub struct CovalentConfig {
    /// Base URL for the Covalent API
    pub base_url: String,
    /// API key for authentication
    pub api_key: String,
    /// Quote currency code for fiat values (e.g. "USD")
    pub quote_currency: String,
    /// Response format requested from the provider
    pub format: DataFormat,
    /// Request timeout in seconds; `None` uses the transport default
    pub timeout_seconds: Option<u64>,
}

impl Default for CovalentConfig {
    fn default() -> Self {
        Self {
            base_url: COVALENT_API.to_string(),
            api_key: "test-api-key".to_string(),
            quote_currency: "USD".to_string(),
            format: DataFormat::Json,
            timeout_seconds: None,
        }
    }
}
