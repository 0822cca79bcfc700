use crate::ClaimOffering;
use alloy::primitives::U256;
use std::sync::Arc;

/// Errors returned by [`Cart`] operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CartError {
    /// No offering with this id exists in the catalog.
    #[error("offering {0} not found")]
    UnknownOffering(String),
    /// The offering exists but its claim data could not be loaded.
    #[error("{title} is unavailable: {reason}")]
    Unavailable {
        /// Offering title.
        title: String,
        /// Why the claim data is missing.
        reason: String,
    },
    /// Adding one more would exceed the offering's wallet maximum.
    #[error("cannot add more {title}! wallet limit: {wallet_max}")]
    WalletLimit {
        /// Offering title.
        title: String,
        /// The offering's wallet maximum.
        wallet_max: u32,
    },
    /// The offering is not in the cart.
    #[error("{0} is not in the cart")]
    NotInCart(String),
    /// The cart already holds the maximum number of distinct offerings.
    #[error("cart is full: at most {0} different items")]
    Full(usize),
}

/// One offering in the cart, with a quantity in `1..=wallet_max`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    offering: Arc<ClaimOffering>,
    quantity: u32,
}

impl CartLine {
    const fn new(offering: Arc<ClaimOffering>) -> Self {
        Self { offering, quantity: 1 }
    }

    /// Get the offering.
    pub const fn offering(&self) -> &Arc<ClaimOffering> {
        &self.offering
    }

    /// Get the storefront id of the offering.
    pub fn id(&self) -> &str {
        self.offering.id()
    }

    /// Get the offering title.
    pub fn title(&self) -> &str {
        self.offering.title()
    }

    /// Get the quantity.
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// True if the quantity has reached the wallet maximum.
    pub fn is_at_max(&self) -> bool {
        self.quantity >= self.offering.wallet_max()
    }

    /// Token price times quantity, without fees. Saturates on overflow.
    pub fn subtotal(&self) -> U256 {
        self.offering.price().saturating_mul(U256::from(self.quantity))
    }

    /// Cost of this line including the per-token platform fee. `None` on
    /// overflow.
    pub fn cost(&self, fee_per_token: U256) -> Option<U256> {
        self.offering.cost(self.quantity, fee_per_token)
    }
}

/// The visitor's cart: an ordered list of lines, at most one per offering.
///
/// Quantities never exceed the offering's wallet maximum and never drop
/// below one; decrementing a single item removes the line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
    /// Maximum number of distinct lines. Zero means unlimited.
    max_lines: usize,
}

impl Cart {
    /// Create an empty cart without a line limit.
    pub const fn new() -> Self {
        Self { lines: Vec::new(), max_lines: 0 }
    }

    /// Create an empty cart holding at most `max_lines` distinct offerings.
    /// Zero means unlimited.
    pub const fn with_max_lines(max_lines: usize) -> Self {
        Self { lines: Vec::new(), max_lines }
    }

    /// Get the line limit. Zero means unlimited.
    pub const fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Get the lines, in the order they were added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Copy of the current lines. Offerings are shared, not cloned.
    pub fn snapshot(&self) -> Vec<CartLine> {
        self.lines.clone()
    }

    /// Get the line for an offering.
    pub fn get(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id() == id)
    }

    fn position(&self, id: &str) -> Result<usize, CartError> {
        self.lines
            .iter()
            .position(|line| line.id() == id)
            .ok_or_else(|| CartError::NotInCart(id.to_string()))
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of tokens across all lines.
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of token prices across all lines, without fees.
    pub fn subtotal(&self) -> U256 {
        self.lines.iter().fold(U256::ZERO, |acc, line| acc.saturating_add(line.subtotal()))
    }

    /// Sum of line costs including the per-token platform fee. `None` on
    /// overflow.
    pub fn total_cost(&self, fee_per_token: U256) -> Option<U256> {
        self.lines
            .iter()
            .try_fold(U256::ZERO, |acc, line| acc.checked_add(line.cost(fee_per_token)?))
    }

    /// Add one of `offering`, creating a line if needed. Returns the new
    /// quantity.
    pub fn add(&mut self, offering: &Arc<ClaimOffering>) -> Result<u32, CartError> {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id() == offering.id()) {
            if line.is_at_max() {
                return Err(CartError::WalletLimit {
                    title: offering.title().to_string(),
                    wallet_max: offering.wallet_max(),
                });
            }
            line.quantity += 1;
            return Ok(line.quantity);
        }

        if self.max_lines != 0 && self.lines.len() >= self.max_lines {
            return Err(CartError::Full(self.max_lines));
        }

        self.lines.push(CartLine::new(Arc::clone(offering)));
        Ok(1)
    }

    /// Increase the quantity of a line by one. Returns the new quantity.
    pub fn increment(&mut self, id: &str) -> Result<u32, CartError> {
        self.change_quantity(id, 1).map(|quantity| quantity.unwrap_or_default())
    }

    /// Decrease the quantity of a line by one. Returns the new quantity, or
    /// `None` if the line was removed.
    pub fn decrement(&mut self, id: &str) -> Result<Option<u32>, CartError> {
        self.change_quantity(id, -1)
    }

    /// Change the quantity of a line by `delta`.
    ///
    /// Returns the new quantity, or `None` if it dropped below one and the
    /// line was removed. A change that would exceed the wallet maximum is
    /// rejected and leaves the line untouched.
    pub fn change_quantity(&mut self, id: &str, delta: i64) -> Result<Option<u32>, CartError> {
        let index = self.position(id)?;
        let line = &mut self.lines[index];
        let wallet_max = line.offering.wallet_max();
        let quantity = i64::from(line.quantity).saturating_add(delta);

        if quantity < 1 {
            self.lines.remove(index);
            return Ok(None);
        }
        if quantity > i64::from(wallet_max) {
            return Err(CartError::WalletLimit { title: line.title().to_string(), wallet_max });
        }

        // Bounded by wallet_max above.
        line.quantity = quantity as u32;
        Ok(Some(line.quantity))
    }

    /// Remove a line. Returns it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<CartLine> {
        let index = self.position(id).ok()?;
        Some(self.lines.remove(index))
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::Address;

    fn offering(id: &str, wallet_max: u32, price: u64) -> Arc<ClaimOffering> {
        Arc::new(
            ClaimOffering::new(id, 1, Address::ZERO, Address::ZERO, U256::from(price), wallet_max)
                .with_title(id.to_uppercase()),
        )
    }

    #[test]
    fn add_creates_then_increments() {
        let mut cart = Cart::new();
        let a = offering("a", 3, 10);

        assert_eq!(cart.add(&a), Ok(1));
        assert_eq!(cart.add(&a), Ok(2));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("a").unwrap().quantity(), 2);
    }

    #[test]
    fn add_stops_at_wallet_max() {
        let mut cart = Cart::new();
        let a = offering("a", 2, 10);

        cart.add(&a).unwrap();
        cart.add(&a).unwrap();
        assert_eq!(cart.add(&a), Err(CartError::WalletLimit { title: "A".into(), wallet_max: 2 }));
        assert_eq!(cart.get("a").unwrap().quantity(), 2);
        assert!(cart.get("a").unwrap().is_at_max());
    }

    #[test]
    fn increment_never_exceeds_wallet_max() {
        let mut cart = Cart::new();
        let a = offering("a", 2, 10);
        cart.add(&a).unwrap();

        assert_eq!(cart.increment("a"), Ok(2));
        assert!(matches!(cart.increment("a"), Err(CartError::WalletLimit { .. })));
        assert!(matches!(cart.change_quantity("a", 5), Err(CartError::WalletLimit { .. })));
        assert_eq!(cart.get("a").unwrap().quantity(), 2);
    }

    #[test]
    fn decrement_of_one_removes_line() {
        let mut cart = Cart::new();
        cart.add(&offering("a", 5, 10)).unwrap();
        cart.add(&offering("b", 5, 10)).unwrap();
        cart.increment("a").unwrap();

        assert_eq!(cart.decrement("a"), Ok(Some(1)));
        assert_eq!(cart.decrement("a"), Ok(None));
        assert!(cart.get("a").is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn unknown_lines_are_reported() {
        let mut cart = Cart::new();
        assert_eq!(cart.increment("nope"), Err(CartError::NotInCart("nope".into())));
        assert!(cart.remove("nope").is_none());
    }

    #[test]
    fn one_line_per_offering_in_insertion_order() {
        let mut cart = Cart::new();
        let a = offering("a", 5, 10);
        let b = offering("b", 5, 10);
        cart.add(&b).unwrap();
        cart.add(&a).unwrap();
        cart.add(&b).unwrap();

        let ids: Vec<_> = cart.lines().iter().map(CartLine::id).collect();
        assert_eq!(ids, ["b", "a"]);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn line_limit() {
        let mut cart = Cart::with_max_lines(1);
        let a = offering("a", 5, 10);
        cart.add(&a).unwrap();
        assert_eq!(cart.add(&offering("b", 5, 10)), Err(CartError::Full(1)));
        // More of an existing line is still fine.
        assert_eq!(cart.add(&a), Ok(2));
    }

    #[test]
    fn totals() {
        let mut cart = Cart::new();
        cart.add(&offering("a", 5, 100)).unwrap();
        cart.add(&offering("a", 5, 100)).unwrap();
        cart.add(&offering("b", 5, 7)).unwrap();

        assert_eq!(cart.subtotal(), U256::from(207));
        assert_eq!(cart.total_cost(U256::from(1)), Some(U256::from(210)));
    }

    #[test]
    fn snapshot_is_detached() {
        let mut cart = Cart::new();
        cart.add(&offering("a", 5, 10)).unwrap();
        let snapshot = cart.snapshot();
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(snapshot.len(), 1);
    }
}
