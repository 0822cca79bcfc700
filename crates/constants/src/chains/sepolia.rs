//! Constants for the Sepolia testnet.

use crate::{NativeCurrency, NetworkTarget};
use std::borrow::Cow;

/// Display name for the Sepolia testnet.
pub const NAME: &str = "Sepolia Testnet";
/// Chain ID for the Sepolia testnet.
pub const CHAIN_ID: u64 = 11155111;
/// Native currency of the Sepolia testnet.
pub const NATIVE_CURRENCY: NativeCurrency = NativeCurrency::new("Sepolia Ether", "SepoliaETH", 18);
/// RPC endpoints offered to a wallet that does not know the chain yet.
pub const RPC_URLS: &[&str] = &[
    "https://sepolia.infura.io/v3/",
    "https://eth-sepolia.g.alchemy.com/v2/",
];
/// Block explorers offered to a wallet that does not know the chain yet.
pub const BLOCK_EXPLORER_URLS: &[&str] = &["https://sepolia.etherscan.io/"];

/// Network target for the Sepolia testnet.
pub const SEPOLIA: NetworkTarget = NetworkTarget::new(
    CHAIN_ID,
    Cow::Borrowed(NAME),
    NATIVE_CURRENCY,
    RPC_URLS,
    BLOCK_EXPLORER_URLS,
);
