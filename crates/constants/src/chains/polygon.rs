//! Constants for Polygon PoS.

use crate::{NativeCurrency, NetworkTarget};
use std::borrow::Cow;

/// Display name for Polygon PoS.
pub const NAME: &str = "Polygon Mainnet";
/// Chain ID for Polygon PoS.
pub const CHAIN_ID: u64 = 137;
/// Native currency of Polygon PoS.
pub const NATIVE_CURRENCY: NativeCurrency = NativeCurrency::new("MATIC", "MATIC", 18);
/// RPC endpoints offered to a wallet that does not know the chain yet.
pub const RPC_URLS: &[&str] = &["https://polygon-rpc.com/", "https://rpc-mainnet.matic.network"];
/// Block explorers offered to a wallet that does not know the chain yet.
pub const BLOCK_EXPLORER_URLS: &[&str] = &["https://polygonscan.com/"];

/// Network target for Polygon PoS.
pub const POLYGON: NetworkTarget = NetworkTarget::new(
    CHAIN_ID,
    Cow::Borrowed(NAME),
    NATIVE_CURRENCY,
    RPC_URLS,
    BLOCK_EXPLORER_URLS,
);
