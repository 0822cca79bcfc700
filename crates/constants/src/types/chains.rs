use crate::NetworkTarget;
use std::str::FromStr;

/// The list of known networks as a string.
const KNOWN_NETWORKS: &str = "mainnet, goerli, sepolia, polygon, mumbai";

/// Error type for parsing a network from its name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseNetworkError {
    /// The network name is not supported.
    #[error("network name {0} is not parseable. supported networks: {KNOWN_NETWORKS}")]
    NetworkNotSupported(String),
}

/// Networks with a built-in descriptor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KnownNetworks {
    /// Ethereum Mainnet.
    Mainnet,
    /// Goerli testnet.
    Goerli,
    /// Sepolia testnet.
    Sepolia,
    /// Polygon PoS.
    Polygon,
    /// Polygon Mumbai testnet.
    Mumbai,
    /// Local test network.
    #[cfg(any(test, feature = "test-utils"))]
    Test,
}

impl KnownNetworks {
    /// Look up a known network by chain ID.
    pub const fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            crate::mainnet::CHAIN_ID => Some(Self::Mainnet),
            crate::goerli::CHAIN_ID => Some(Self::Goerli),
            crate::sepolia::CHAIN_ID => Some(Self::Sepolia),
            crate::polygon::CHAIN_ID => Some(Self::Polygon),
            crate::mumbai::CHAIN_ID => Some(Self::Mumbai),
            #[cfg(any(test, feature = "test-utils"))]
            crate::test_utils::CHAIN_ID => Some(Self::Test),
            _ => None,
        }
    }

    /// Get the chain ID.
    pub const fn chain_id(self) -> u64 {
        match self {
            Self::Mainnet => crate::mainnet::CHAIN_ID,
            Self::Goerli => crate::goerli::CHAIN_ID,
            Self::Sepolia => crate::sepolia::CHAIN_ID,
            Self::Polygon => crate::polygon::CHAIN_ID,
            Self::Mumbai => crate::mumbai::CHAIN_ID,
            #[cfg(any(test, feature = "test-utils"))]
            Self::Test => crate::test_utils::CHAIN_ID,
        }
    }

    /// Get the full network descriptor.
    pub const fn target(self) -> NetworkTarget {
        match self {
            Self::Mainnet => crate::mainnet::MAINNET,
            Self::Goerli => crate::goerli::GOERLI,
            Self::Sepolia => crate::sepolia::SEPOLIA,
            Self::Polygon => crate::polygon::POLYGON,
            Self::Mumbai => crate::mumbai::MUMBAI,
            #[cfg(any(test, feature = "test-utils"))]
            Self::Test => crate::test_utils::TEST_NETWORK,
        }
    }
}

impl FromStr for KnownNetworks {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            #[cfg(any(test, feature = "test-utils"))]
            "test" => Ok(Self::Test),
            "mainnet" | "ethereum" => Ok(Self::Mainnet),
            "goerli" => Ok(Self::Goerli),
            "sepolia" => Ok(Self::Sepolia),
            "polygon" | "matic" => Ok(Self::Polygon),
            "mumbai" => Ok(Self::Mumbai),
            _ => Err(ParseNetworkError::NetworkNotSupported(s)),
        }
    }
}
