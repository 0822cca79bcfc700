//! Constants for the Goerli testnet.

use crate::{NativeCurrency, NetworkTarget};
use std::borrow::Cow;

/// Display name for the Goerli testnet.
pub const NAME: &str = "Goerli Testnet";
/// Chain ID for the Goerli testnet.
pub const CHAIN_ID: u64 = 5;
/// Native currency of the Goerli testnet.
pub const NATIVE_CURRENCY: NativeCurrency = NativeCurrency::new("Goerli Ether", "GoerliETH", 18);
/// RPC endpoints offered to a wallet that does not know the chain yet.
pub const RPC_URLS: &[&str] = &[
    "https://goerli.infura.io/v3/",
    "https://eth-goerli.alchemyapi.io/v2/",
];
/// Block explorers offered to a wallet that does not know the chain yet.
pub const BLOCK_EXPLORER_URLS: &[&str] = &["https://goerli.etherscan.io/"];

/// Network target for the Goerli testnet.
pub const GOERLI: NetworkTarget = NetworkTarget::new(
    CHAIN_ID,
    Cow::Borrowed(NAME),
    NATIVE_CURRENCY,
    RPC_URLS,
    BLOCK_EXPLORER_URLS,
);
