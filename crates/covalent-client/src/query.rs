// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Query construction for Covalent endpoints
//!
//! URL assembly and request parameters are pure functions so they can be
//! verified without a transport. Optional parameter groups are only added
//! when the caller supplies the corresponding options object; absence
//! means the parameters are not set at all, not set to defaults.

use crate::config::DataFormat;

/// Joins URL segments with `/`, guaranteeing a single trailing slash
/// regardless of the trailing-slash state of the input segments.
pub fn build_url<I>(segments: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let joined = segments
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect::<Vec<_>>()
        .join("/");
    format!("{}/", joined.trim_end_matches('/'))
}

/// Returns the parameters every Covalent request carries: the API key,
/// the quote currency, and the response format tag.
pub fn global_params(
    api_key: &str,
    quote_currency: &str,
    format: DataFormat,
) -> Vec<(String, String)> {
    vec![
        ("key".to_string(), api_key.to_string()),
        ("quote-currency".to_string(), quote_currency.to_string()),
        ("format".to_string(), format.as_str().to_string()),
    ]
}

/// Pagination request parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationOptions {
    /// Zero-based page number to request
    pub page: u32,
    /// Number of items per page
    pub per_page: u32,
}

/// Block range request parameters; unset bounds fall back to the
/// provider defaults `"0"` and `"latest"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockRangeOptions {
    /// Lower block bound, inclusive
    pub start_block: Option<u64>,
    /// Upper block bound, inclusive
    pub end_block: Option<u64>,
}

/// Optional parameter groups accepted by the transactions and transfers
/// endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestOptions {
    /// Page selection; omitted entirely when `None`
    pub pagination: Option<PaginationOptions>,
    /// Block range bounds; omitted entirely when `None`
    pub block_range: Option<BlockRangeOptions>,
}

impl RequestOptions {
    /// Appends the parameters derived from the supplied option groups.
    pub fn apply(&self, params: &mut Vec<(String, String)>) {
        if let Some(pagination) = self.pagination {
            params.push(("page-number".to_string(), pagination.page.to_string()));
            params.push(("page-size".to_string(), pagination.per_page.to_string()));
        }

        if let Some(block_range) = self.block_range {
            let start = block_range
                .start_block
                .map_or_else(|| "0".to_string(), |b| b.to_string());
            let end = block_range
                .end_block
                .map_or_else(|| "latest".to_string(), |b| b.to_string());
            params.push(("starting-block".to_string(), start));
            params.push(("ending-block".to_string(), end));
        }
    }
}
