// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Blockchain network identifiers and their Covalent chain slugs
//!
//! This module provides type-safe network identifiers for the chains the
//! Covalent API can be queried against, keyed by the canonical numeric
//! chain id.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Supported blockchain networks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// Ethereum Mainnet - Chain ID: 1
    Ethereum = 1,
    /// Optimism - Chain ID: 10
    Optimism = 10,
    /// Binance Smart Chain - Chain ID: 56
    Bsc = 56,
    /// Ethereum Classic - Chain ID: 61
    EthereumClassic = 61,
    /// Gnosis Chain - Chain ID: 100
    Gnosis = 100,
    /// Polygon - Chain ID: 137
    Polygon = 137,
    /// Fantom Opera - Chain ID: 250
    Fantom = 250,
    /// Base - Chain ID: 8453
    Base = 8453,
    /// Arbitrum One - Chain ID: 42161
    Arbitrum = 42161,
    /// Avalanche C-Chain - Chain ID: 43114
    Avalanche = 43114,
}

impl Network {
    /// Returns the numeric chain ID
    pub const fn chain_id(self) -> u64 {
        match self {
            Self::Ethereum => 1,
            Self::Optimism => 10,
            Self::Bsc => 56,
            Self::EthereumClassic => 61,
            Self::Gnosis => 100,
            Self::Polygon => 137,
            Self::Fantom => 250,
            Self::Base => 8453,
            Self::Arbitrum => 42161,
            Self::Avalanche => 43114,
        }
    }

    /// Returns the Covalent chain slug used in request paths
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Ethereum => "eth-mainnet",
            Self::Optimism => "optimism-mainnet",
            Self::Bsc => "bsc-mainnet",
            Self::EthereumClassic => "etc-mainnet",
            Self::Gnosis => "gnosis-mainnet",
            Self::Polygon => "matic-mainnet",
            Self::Fantom => "fantom-mainnet",
            Self::Base => "base-mainnet",
            Self::Arbitrum => "arbitrum-mainnet",
            Self::Avalanche => "avalanche-mainnet",
        }
    }

    /// Returns the human-readable name of the network
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ethereum => "Ethereum Mainnet",
            Self::Optimism => "Optimistic Ethereum",
            Self::Bsc => "Binance Smart Chain Mainnet",
            Self::EthereumClassic => "Ethereum Classic Mainnet",
            Self::Gnosis => "Gnosis Chain",
            Self::Polygon => "Matic Mainnet",
            Self::Fantom => "Fantom Opera",
            Self::Base => "Base",
            Self::Arbitrum => "Arbitrum One",
            Self::Avalanche => "Avalanche Mainnet C-Chain",
        }
    }

    /// Returns all supported networks
    pub const fn all() -> &'static [Self] {
        &[
            Self::Ethereum,
            Self::Optimism,
            Self::Bsc,
            Self::EthereumClassic,
            Self::Gnosis,
            Self::Polygon,
            Self::Fantom,
            Self::Base,
            Self::Arbitrum,
            Self::Avalanche,
        ]
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<u64> for Network {
    type Error = UnknownChainError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        match id {
            1 => Ok(Self::Ethereum),
            10 => Ok(Self::Optimism),
            56 => Ok(Self::Bsc),
            61 => Ok(Self::EthereumClassic),
            100 => Ok(Self::Gnosis),
            137 => Ok(Self::Polygon),
            250 => Ok(Self::Fantom),
            8453 => Ok(Self::Base),
            42161 => Ok(Self::Arbitrum),
            43114 => Ok(Self::Avalanche),
            _ => Err(UnknownChainError(id)),
        }
    }
}

impl FromStr for Network {
    type Err = UnknownChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.parse::<u64>().map_err(|_| UnknownChainError(0))?;
        Self::try_from(id)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.chain_id().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = u64::deserialize(deserializer)?;
        Self::try_from(id).map_err(serde::de::Error::custom)
    }
}

/// Error returned when a chain id is not present in the registry
#[derive(Debug, thiserror::Error)]
#[error("unknown chain id: {0}")]
pub struct UnknownChainError(pub u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_chain_ids() {
        assert_eq!(Network::try_from(1).unwrap(), Network::Ethereum);
        assert_eq!(Network::try_from(56).unwrap(), Network::Bsc);
        assert_eq!(Network::try_from(61).unwrap(), Network::EthereumClassic);
        assert_eq!(Network::try_from(137).unwrap(), Network::Polygon);
        assert_eq!(Network::try_from(42161).unwrap(), Network::Arbitrum);
        assert_eq!(Network::try_from(10).unwrap(), Network::Optimism);
        assert_eq!(Network::try_from(43114).unwrap(), Network::Avalanche);
        assert_eq!(Network::try_from(8453).unwrap(), Network::Base);
        assert_eq!(Network::try_from(100).unwrap(), Network::Gnosis);
        assert_eq!(Network::try_from(250).unwrap(), Network::Fantom);
    }

    #[test]
    fn unknown_chain_id_fails() {
        let err = Network::try_from(999).unwrap_err();
        assert_eq!(err.0, 999);
        assert!(err.to_string().contains("999"));
    }

    #[test]
    fn slug_and_name_pairs() {
        assert_eq!(Network::Ethereum.slug(), "eth-mainnet");
        assert_eq!(Network::Ethereum.name(), "Ethereum Mainnet");
        assert_eq!(Network::Polygon.slug(), "matic-mainnet");
        assert_eq!(Network::Polygon.name(), "Matic Mainnet");
        assert_eq!(Network::Avalanche.slug(), "avalanche-mainnet");
        assert_eq!(Network::Avalanche.name(), "Avalanche Mainnet C-Chain");
        assert_eq!(Network::Bsc.slug(), "bsc-mainnet");
        assert_eq!(Network::Gnosis.slug(), "gnosis-mainnet");
        assert_eq!(Network::Fantom.slug(), "fantom-mainnet");
    }

    #[test]
    fn from_numeric_string() {
        assert_eq!(Network::from_str("1").unwrap(), Network::Ethereum);
        assert_eq!(Network::from_str("8453").unwrap(), Network::Base);
        assert!(Network::from_str("999").is_err());
        assert!(Network::from_str("not-a-number").is_err());
    }

    #[test]
    fn all_networks_round_trip() {
        for &network in Network::all() {
            let id = network.chain_id();
            assert_eq!(Network::try_from(id).unwrap(), network);
            assert_eq!(Network::from_str(&id.to_string()).unwrap(), network);
            assert!(!network.slug().is_empty());
            assert!(!network.name().is_empty());
        }
    }

    #[test]
    fn all_networks_unique() {
        let mut ids = std::collections::HashSet::new();
        let mut slugs = std::collections::HashSet::new();
        for &network in Network::all() {
            assert!(ids.insert(network.chain_id()));
            assert!(slugs.insert(network.slug()));
        }
        assert_eq!(Network::all().len(), 10);
    }

    #[test]
    fn serde_round_trip_as_numeric_id() {
        let serialized = serde_json::to_string(&Network::Polygon).unwrap();
        assert_eq!(serialized, "137");

        let deserialized: Network = serde_json::from_str("137").unwrap();
        assert_eq!(deserialized, Network::Polygon);

        assert!(serde_json::from_str::<Network>("999").is_err());
    }
}
