use crate::{CartError, ClaimOffering, Offering};
use std::sync::Arc;

/// The ordered list of offerings shown by the storefront.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    offerings: Vec<Offering>,
}

impl Catalog {
    /// Create a catalog from a list of offerings, keeping their order.
    pub const fn new(offerings: Vec<Offering>) -> Self {
        Self { offerings }
    }

    /// Get all offerings, in display order.
    pub fn offerings(&self) -> &[Offering] {
        &self.offerings
    }

    /// Iterate over the offerings whose claim data was loaded.
    pub fn available(&self) -> impl Iterator<Item = &Arc<ClaimOffering>> + '_ {
        self.offerings.iter().filter_map(Offering::as_available)
    }

    /// Look up an offering by storefront id.
    pub fn get(&self, id: &str) -> Option<&Offering> {
        self.offerings.iter().find(|offering| offering.id() == id)
    }

    /// Look up an offering that can be added to the cart.
    pub fn purchasable(&self, id: &str) -> Result<&Arc<ClaimOffering>, CartError> {
        match self.get(id) {
            Some(Offering::Available(offering)) => Ok(offering),
            Some(Offering::Unavailable(unavailable)) => Err(CartError::Unavailable {
                title: unavailable.title().to_string(),
                reason: unavailable.reason().to_string(),
            }),
            None => Err(CartError::UnknownOffering(id.to_string())),
        }
    }

    /// Number of offerings, available or not.
    pub fn len(&self) -> usize {
        self.offerings.len()
    }

    /// True if the catalog has no offerings.
    pub fn is_empty(&self) -> bool {
        self.offerings.is_empty()
    }
}

impl From<Vec<Offering>> for Catalog {
    fn from(offerings: Vec<Offering>) -> Self {
        Self::new(offerings)
    }
}

impl FromIterator<Offering> for Catalog {
    fn from_iter<T: IntoIterator<Item = Offering>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
