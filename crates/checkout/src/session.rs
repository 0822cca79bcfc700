use crate::{Checkout, CheckoutError, CheckoutOptions, WalletProvider};
use alloy::primitives::U256;
use mintcart_types::{
    format_amount, Cart, CartError, CartLine, Catalog, CheckoutResult, MarketplaceConfig,
};
use tracing::debug;

/// One visitor's storefront: the loaded catalog, their cart, and the
/// checkout that will pay for it.
///
/// UI handlers go through this type; it owns all session state.
#[derive(Debug)]
pub struct Storefront<P> {
    config: MarketplaceConfig,
    catalog: Catalog,
    cart: Cart,
    checkout: Checkout<P>,
}

impl<P> Storefront<P> {
    /// Create a storefront with default checkout options and no wallet.
    pub fn new(config: MarketplaceConfig, catalog: Catalog) -> Self {
        let checkout = Checkout::new(config.network().clone(), CheckoutOptions::default());
        Self::from_parts(config, catalog, checkout)
    }

    /// Create a storefront around an existing checkout.
    pub fn from_parts(config: MarketplaceConfig, catalog: Catalog, checkout: Checkout<P>) -> Self {
        let cart = Cart::with_max_lines(config.max_cart_items());
        Self { config, catalog, cart, checkout }
    }

    /// Connect a wallet, replacing the current one.
    pub fn connect(&mut self, provider: P) -> Option<P> {
        self.checkout.connect(provider)
    }

    /// Disconnect the wallet.
    pub fn disconnect(&mut self) -> Option<P> {
        self.checkout.disconnect()
    }

    /// Get the storefront config.
    pub const fn config(&self) -> &MarketplaceConfig {
        &self.config
    }

    /// Get the catalog.
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Replace the catalog. Lines already in the cart are kept.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    /// Get the cart.
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Get the checkout orchestrator, e.g. to subscribe to its state.
    pub const fn orchestrator(&self) -> &Checkout<P> {
        &self.checkout
    }

    /// Add one of the offering `id` to the cart. Returns the new quantity.
    pub fn add_to_cart(&mut self, id: &str) -> Result<u32, CartError> {
        let offering = self.catalog.purchasable(id)?;
        let quantity = self.cart.add(offering)?;
        debug!(id, quantity, "added to cart");
        Ok(quantity)
    }

    /// Change the quantity of a line by `delta`. Returns the new quantity,
    /// or `None` if the line was removed.
    pub fn change_quantity(&mut self, id: &str, delta: i64) -> Result<Option<u32>, CartError> {
        self.cart.change_quantity(id, delta)
    }

    /// Add one more of a line. Returns the new quantity.
    pub fn increment(&mut self, id: &str) -> Result<u32, CartError> {
        self.cart.increment(id)
    }

    /// Remove one of a line. Returns the new quantity, or `None` if the
    /// line was removed.
    pub fn decrement(&mut self, id: &str) -> Result<Option<u32>, CartError> {
        self.cart.decrement(id)
    }

    /// Remove a line.
    pub fn remove_from_cart(&mut self, id: &str) -> Option<CartLine> {
        self.cart.remove(id)
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Sum of token prices in the cart, without fees.
    pub fn cart_subtotal(&self) -> U256 {
        self.cart.subtotal()
    }

    /// Amount the wallet will be asked to pay for the cart, fees included.
    pub fn cart_total(&self) -> U256 {
        self.checkout.total_cost(self.cart.lines())
    }

    /// The cart subtotal for display, with four decimals.
    pub fn formatted_cart_subtotal(&self) -> String {
        format_amount(self.cart_subtotal(), 4, self.currency_symbol())
    }

    /// The cart total for display, with six decimals.
    pub fn formatted_cart_total(&self) -> String {
        format_amount(self.cart_total(), 6, self.currency_symbol())
    }

    fn currency_symbol(&self) -> &'static str {
        self.config.network().native_currency().symbol()
    }
}

impl<P> Storefront<P>
where
    P: WalletProvider + Sync,
{
    /// Purchase everything in the cart. See [`Checkout::checkout`].
    pub async fn checkout(&mut self) -> Result<CheckoutResult, CheckoutError> {
        self.checkout.checkout(&mut self.cart).await
    }
}
