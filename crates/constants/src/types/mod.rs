mod chains;
pub use chains::{KnownNetworks, ParseNetworkError};

use std::{borrow::Cow, str::FromStr};

/// The native currency of a network, as presented to a wallet when it is
/// asked to add the network.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct NativeCurrency {
    /// Currency name, e.g. "Ether".
    name: &'static str,
    /// Ticker symbol, e.g. "ETH".
    symbol: &'static str,
    /// Number of decimals of the base unit.
    decimals: u8,
}

impl NativeCurrency {
    /// Ether with 18 decimals. Used for networks without a known descriptor.
    pub const ETHER: Self = Self::new("ETH", "ETH", 18);

    /// Create a new native currency descriptor.
    pub const fn new(name: &'static str, symbol: &'static str, decimals: u8) -> Self {
        Self { name, symbol, decimals }
    }

    /// Get the currency name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Get the ticker symbol.
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Get the number of decimals.
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }
}

/// The network a storefront requires the wallet to be connected to.
///
/// Besides the chain ID, the target carries everything a wallet needs to
/// register the chain if it does not know it yet: display name, native
/// currency, RPC endpoints and block explorers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkTarget {
    /// Chain ID.
    chain_id: u64,
    /// Human-readable network name.
    name: Cow<'static, str>,
    /// Native currency descriptor.
    native_currency: NativeCurrency,
    /// RPC endpoints.
    rpc_urls: &'static [&'static str],
    /// Block explorer URLs.
    block_explorer_urls: &'static [&'static str],
}

impl core::fmt::Display for NetworkTarget {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} (chain {})", self.name, self.chain_id)
    }
}

impl NetworkTarget {
    /// Create a new network target.
    pub const fn new(
        chain_id: u64,
        name: Cow<'static, str>,
        native_currency: NativeCurrency,
        rpc_urls: &'static [&'static str],
        block_explorer_urls: &'static [&'static str],
    ) -> Self {
        Self { chain_id, name, native_currency, rpc_urls, block_explorer_urls }
    }

    /// Get the hard-coded Ethereum Mainnet target.
    pub const fn mainnet() -> Self {
        crate::chains::mainnet::MAINNET
    }

    /// Get the hard-coded Sepolia target.
    pub const fn sepolia() -> Self {
        crate::chains::sepolia::SEPOLIA
    }

    /// Get the hard-coded local test target.
    #[cfg(any(test, feature = "test-utils"))]
    pub const fn test() -> Self {
        crate::chains::test_utils::TEST_NETWORK
    }

    /// Descriptor for a chain we know nothing about beyond its ID.
    ///
    /// The name is `Network <id>`, the currency is ETH, and no RPC or
    /// explorer URLs are offered.
    pub fn generic(chain_id: u64) -> Self {
        let name = Cow::Owned(format!("Network {chain_id}"));
        Self::new(chain_id, name, NativeCurrency::ETHER, &[], &[])
    }

    /// Get the target for a chain ID, falling back to [`Self::generic`]
    /// when the chain is not a [`KnownNetworks`] member.
    pub fn for_chain_id(chain_id: u64) -> Self {
        KnownNetworks::from_chain_id(chain_id)
            .map(KnownNetworks::target)
            .unwrap_or_else(|| Self::generic(chain_id))
    }

    /// Get the chain ID.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Get the chain ID as a `0x`-prefixed hex quantity, as wallets expect
    /// it in `wallet_switchEthereumChain`.
    pub fn chain_id_hex(&self) -> String {
        format!("{:#x}", self.chain_id)
    }

    /// Get the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the native currency.
    pub const fn native_currency(&self) -> NativeCurrency {
        self.native_currency
    }

    /// Get the RPC endpoints.
    pub const fn rpc_urls(&self) -> &'static [&'static str] {
        self.rpc_urls
    }

    /// Get the block explorer URLs.
    pub const fn block_explorer_urls(&self) -> &'static [&'static str] {
        self.block_explorer_urls
    }
}

impl FromStr for NetworkTarget {
    type Err = ParseNetworkError;

    /// Parse either a decimal chain ID or a known network name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u64>() {
            Ok(chain_id) => Ok(Self::for_chain_id(chain_id)),
            Err(_) => s.parse::<KnownNetworks>().map(KnownNetworks::target),
        }
    }
}

impl From<KnownNetworks> for NetworkTarget {
    fn from(network: KnownNetworks) -> Self {
        network.target()
    }
}
