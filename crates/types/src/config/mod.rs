//! Storefront configuration: environment settings and the claim list.

mod claims;
pub use claims::{ClaimConfig, ClaimIds, ClaimIdsMetadata, Theme};

mod env_utils;
pub use env_utils::{load_string, load_string_opt, load_usize_opt};

mod error;
pub use error::ConfigError;

use mintcart_constants::NetworkTarget;

/// Default storefront title.
pub const DEFAULT_TITLE: &str = "My NFT Marketplace";

/// Default storefront description.
pub const DEFAULT_DESCRIPTION: &str = "A simple NFT marketplace powered by Manifold";

/// Default maximum number of distinct cart lines.
pub const DEFAULT_MAX_CART_ITEMS: usize = 10;

const TITLE: &str = "MINTCART_TITLE";
const DESCRIPTION: &str = "MINTCART_DESCRIPTION";
const CLIENT_ID: &str = "MINTCART_CLIENT_ID";
const NETWORK: &str = "MINTCART_NETWORK";
const MAX_CART_ITEMS: &str = "MINTCART_MAX_CART_ITEMS";
const CLAIM_API_URL: &str = "MINTCART_CLAIM_API_URL";

/// Storefront settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketplaceConfig {
    /// Storefront title.
    title: String,
    /// Storefront description.
    description: String,
    /// Wallet widget client id. `None` until the operator configures one.
    client_id: Option<String>,
    /// The network every purchase is made on.
    network: NetworkTarget,
    /// Maximum number of distinct cart lines. Zero means unlimited.
    max_cart_items: usize,
    /// Claim API base URL override.
    claim_api_url: Option<String>,
}

impl MarketplaceConfig {
    /// Create a config for `network` with default settings.
    pub fn new(network: NetworkTarget) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            client_id: None,
            network,
            max_cart_items: DEFAULT_MAX_CART_ITEMS,
            claim_api_url: None,
        }
    }

    /// Load the config from the environment.
    ///
    /// `MINTCART_NETWORK` is required and accepts a chain id or a known
    /// network name. Everything else falls back to its default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let network = load_string(NETWORK)?.parse::<NetworkTarget>()?;
        let mut config = Self::new(network);

        if let Some(title) = load_string_opt(TITLE) {
            config.title = title;
        }
        if let Some(description) = load_string_opt(DESCRIPTION) {
            config.description = description;
        }
        config.client_id = load_string_opt(CLIENT_ID);
        if let Some(max_cart_items) = load_usize_opt(MAX_CART_ITEMS)? {
            config.max_cart_items = max_cart_items;
        }
        config.claim_api_url = load_string_opt(CLAIM_API_URL);

        Ok(config)
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the client id. An empty id leaves the storefront unconfigured.
    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        let client_id = client_id.into();
        self.client_id = (!client_id.trim().is_empty()).then_some(client_id);
        self
    }

    /// Set the maximum number of distinct cart lines. Zero means unlimited.
    pub const fn with_max_cart_items(mut self, max_cart_items: usize) -> Self {
        self.max_cart_items = max_cart_items;
        self
    }

    /// Set the claim API base URL.
    pub fn with_claim_api_url(mut self, url: impl Into<String>) -> Self {
        self.claim_api_url = Some(url.into());
        self
    }

    /// Get the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the client id.
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// Get the network target.
    pub const fn network(&self) -> &NetworkTarget {
        &self.network
    }

    /// Get the maximum number of distinct cart lines.
    pub const fn max_cart_items(&self) -> usize {
        self.max_cart_items
    }

    /// Get the claim API base URL override.
    pub fn claim_api_url(&self) -> Option<&str> {
        self.claim_api_url.as_deref()
    }

    /// True if a client id has been set.
    pub const fn is_configured(&self) -> bool {
        self.client_id.is_some()
    }
}
