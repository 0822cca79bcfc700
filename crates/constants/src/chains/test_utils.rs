//! Constants for a local test network.

use crate::{NativeCurrency, NetworkTarget};
use std::borrow::Cow;

/// Display name for the test network.
pub const NAME: &str = "Test Network";
/// Chain ID for the test network. Matches the anvil default.
pub const CHAIN_ID: u64 = 31337;
/// Native currency of the test network.
pub const NATIVE_CURRENCY: NativeCurrency = NativeCurrency::new("Test Ether", "TETH", 18);
/// RPC endpoint of a local node.
pub const RPC_URLS: &[&str] = &["http://localhost:8545"];

/// Network target for the test network.
pub const TEST_NETWORK: NetworkTarget =
    NetworkTarget::new(CHAIN_ID, Cow::Borrowed(NAME), NATIVE_CURRENCY, RPC_URLS, &[]);
