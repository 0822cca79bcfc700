use crate::format_price;
use alloy::primitives::{Address, U256};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Wallet limit applied when the claim does not report one.
const DEFAULT_WALLET_MAX: u32 = 10;

/// Description shown when neither the storefront nor the claim provides one.
pub const DEFAULT_DESCRIPTION: &str = "An NFT collection powered by Manifold";

/// One purchasable claim, with the on-chain data needed to mint it.
///
/// Offerings are built once by the catalog loader and are read-only
/// afterwards. Cart lines share them through an [`Arc`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimOffering {
    /// Storefront identifier, used as the cart key.
    id: String,
    /// Claim instance id. Also the `instanceId` argument of the mint call.
    instance_id: u64,
    /// Display title.
    title: String,
    /// Display description.
    description: String,
    /// Image shown on the collection card.
    image_url: Option<String>,
    /// Creator contract the tokens are minted on.
    contract_address: Address,
    /// Claim extension contract that is actually invoked.
    extension_address: Address,
    /// Price per token, in base units.
    price: U256,
    /// Currency symbol of the price.
    currency: String,
    /// Maximum quantity a single wallet may mint.
    wallet_max: u32,
    /// Total token supply, if capped.
    total_supply: Option<u64>,
    /// When the claim opens, if scheduled.
    start_date: Option<DateTime<Utc>>,
}

impl ClaimOffering {
    /// Create a new offering. The title defaults to `Claim <instance id>`,
    /// the description to [`DEFAULT_DESCRIPTION`] and the currency to ETH.
    /// A wallet max of zero is raised to one.
    pub fn new(
        id: impl Into<String>,
        instance_id: u64,
        contract_address: Address,
        extension_address: Address,
        price: U256,
        wallet_max: u32,
    ) -> Self {
        Self {
            id: id.into(),
            instance_id,
            title: format!("Claim {instance_id}"),
            description: DEFAULT_DESCRIPTION.to_string(),
            image_url: None,
            contract_address,
            extension_address,
            price,
            currency: "ETH".to_string(),
            wallet_max: wallet_max.max(1),
            total_supply: None,
            start_date: None,
        }
    }

    /// The wallet limit to assume when a claim does not report one.
    pub const fn default_wallet_max() -> u32 {
        DEFAULT_WALLET_MAX
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

    /// Set the image URL.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Set the currency symbol.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Set the total supply.
    pub fn with_total_supply(mut self, total_supply: u64) -> Self {
        self.total_supply = Some(total_supply);
        self
    }

    /// Set the start date.
    pub fn with_start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Get the storefront id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the claim instance id.
    pub const fn instance_id(&self) -> u64 {
        self.instance_id
    }

    /// Get the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the image URL.
    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    /// Get the creator contract address.
    pub const fn contract_address(&self) -> Address {
        self.contract_address
    }

    /// Get the extension address the mint transaction is sent to.
    pub const fn extension_address(&self) -> Address {
        self.extension_address
    }

    /// Get the price per token in base units.
    pub const fn price(&self) -> U256 {
        self.price
    }

    /// Get the currency symbol.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Get the per-wallet maximum quantity. Always at least one.
    pub const fn wallet_max(&self) -> u32 {
        self.wallet_max
    }

    /// Get the total supply.
    pub const fn total_supply(&self) -> Option<u64> {
        self.total_supply
    }

    /// Get the start date.
    pub const fn start_date(&self) -> Option<DateTime<Utc>> {
        self.start_date
    }

    /// True if the claim has opened at `now`. Claims without a start date
    /// are always open.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.start_date.is_none_or(|start| now >= start)
    }

    /// Price formatted for display, e.g. `0.0050 ETH` or `Free`.
    pub fn formatted_price(&self) -> String {
        format_price(self.price, &self.currency)
    }

    /// Cost of minting `quantity` tokens: the token price plus the flat
    /// platform fee, both per token. `None` on overflow.
    pub fn cost(&self, quantity: u32, fee_per_token: U256) -> Option<U256> {
        let quantity = U256::from(quantity);
        let tokens = self.price.checked_mul(quantity)?;
        let fees = fee_per_token.checked_mul(quantity)?;
        tokens.checked_add(fees)
    }
}

/// An offering whose claim data could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnavailableOffering {
    /// Storefront identifier.
    id: String,
    /// Claim instance id that failed to load.
    instance_id: u64,
    /// Display title.
    title: String,
    /// Why the claim is unavailable.
    reason: String,
}

impl UnavailableOffering {
    /// Create a new unavailable offering.
    pub fn new(
        id: impl Into<String>,
        instance_id: u64,
        title: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self { id: id.into(), instance_id, title: title.into(), reason: reason.into() }
    }

    /// Get the storefront id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the claim instance id.
    pub const fn instance_id(&self) -> u64 {
        self.instance_id
    }

    /// Get the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the reason the claim could not be loaded.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// A catalog entry: either a claim with resolved on-chain data, or a claim
/// whose data could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Offering {
    /// Claim data was loaded; the offering can be added to the cart.
    Available(Arc<ClaimOffering>),
    /// Claim data could not be loaded.
    Unavailable(UnavailableOffering),
}

impl Offering {
    /// Get the storefront id.
    pub fn id(&self) -> &str {
        match self {
            Self::Available(offering) => offering.id(),
            Self::Unavailable(unavailable) => unavailable.id(),
        }
    }

    /// Get the claim instance id.
    pub fn instance_id(&self) -> u64 {
        match self {
            Self::Available(offering) => offering.instance_id(),
            Self::Unavailable(unavailable) => unavailable.instance_id(),
        }
    }

    /// Get the title.
    pub fn title(&self) -> &str {
        match self {
            Self::Available(offering) => offering.title(),
            Self::Unavailable(unavailable) => unavailable.title(),
        }
    }

    /// True if the offering can be purchased.
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// Get the claim data, if it was loaded.
    pub const fn as_available(&self) -> Option<&Arc<ClaimOffering>> {
        match self {
            Self::Available(offering) => Some(offering),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<ClaimOffering> for Offering {
    fn from(offering: ClaimOffering) -> Self {
        Self::Available(Arc::new(offering))
    }
}

impl From<UnavailableOffering> for Offering {
    fn from(unavailable: UnavailableOffering) -> Self {
        Self::Unavailable(unavailable)
    }
}
