//! Constants for Ethereum Mainnet.

use crate::{NativeCurrency, NetworkTarget};
use std::borrow::Cow;

/// Display name for Ethereum Mainnet.
pub const NAME: &str = "Ethereum Mainnet";
/// Chain ID for Ethereum Mainnet.
pub const CHAIN_ID: u64 = 1;
/// Native currency of Ethereum Mainnet.
pub const NATIVE_CURRENCY: NativeCurrency = NativeCurrency::new("Ether", "ETH", 18);
/// RPC endpoints offered to a wallet that does not know the chain yet.
pub const RPC_URLS: &[&str] = &[
    "https://mainnet.infura.io/v3/",
    "https://eth-mainnet.alchemyapi.io/v2/",
];
/// Block explorers offered to a wallet that does not know the chain yet.
pub const BLOCK_EXPLORER_URLS: &[&str] = &["https://etherscan.io/"];

/// Network target for Ethereum Mainnet.
pub const MAINNET: NetworkTarget = NetworkTarget::new(
    CHAIN_ID,
    Cow::Borrowed(NAME),
    NATIVE_CURRENCY,
    RPC_URLS,
    BLOCK_EXPLORER_URLS,
);
