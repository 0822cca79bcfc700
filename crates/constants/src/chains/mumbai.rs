//! Constants for the Polygon Mumbai testnet.

use crate::{NativeCurrency, NetworkTarget};
use std::borrow::Cow;

/// Display name for the Polygon Mumbai testnet.
pub const NAME: &str = "Polygon Mumbai";
/// Chain ID for the Polygon Mumbai testnet.
pub const CHAIN_ID: u64 = 80001;
/// Native currency of the Polygon Mumbai testnet.
pub const NATIVE_CURRENCY: NativeCurrency = NativeCurrency::new("MATIC", "MATIC", 18);
/// RPC endpoints offered to a wallet that does not know the chain yet.
pub const RPC_URLS: &[&str] = &[
    "https://rpc-mumbai.maticvigil.com/",
    "https://matic-mumbai.chainstacklabs.com",
];
/// Block explorers offered to a wallet that does not know the chain yet.
pub const BLOCK_EXPLORER_URLS: &[&str] = &["https://mumbai.polygonscan.com/"];

/// Network target for the Polygon Mumbai testnet.
pub const MUMBAI: NetworkTarget = NetworkTarget::new(
    CHAIN_ID,
    Cow::Borrowed(NAME),
    NATIVE_CURRENCY,
    RPC_URLS,
    BLOCK_EXPLORER_URLS,
);
