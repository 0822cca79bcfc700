/// Ethereum Mainnet constants.
pub mod mainnet;

/// Goerli testnet constants.
pub mod goerli;

/// Sepolia testnet constants.
pub mod sepolia;

/// Polygon PoS constants.
pub mod polygon;

/// Polygon Mumbai testnet constants.
pub mod mumbai;

/// Test utilities for networks.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
