//! Canned claim data and a [`ClaimSource`] that serves it.
use alloy::primitives::{Address, U256};
use mintcart_catalog::{
    types::{AddressValue, Asset, ContractInfo, MintPrice, PublicData},
    CatalogError, ClaimSource, InstanceData,
};
use mintcart_types::{Catalog, ClaimConfig, ClaimIds, ClaimOffering, Offering};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

/// Creator contract used by test claims.
pub const TEST_CONTRACT: Address = Address::repeat_byte(0x11);

/// ERC-721 claim extension used by test claims.
pub const TEST_EXTENSION: Address = Address::repeat_byte(0x22);

/// One ether, in wei.
pub const ONE_ETH: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Build the API response of an ERC-721 claim titled `Test Claim <id>`.
pub fn instance_data(instance_id: u64, price: U256, wallet_max: u32) -> InstanceData {
    InstanceData {
        id: Some(instance_id),
        public_data: PublicData {
            asset: Asset { name: Some(format!("Test Claim {instance_id}")), ..Default::default() },
            contract: ContractInfo {
                contract_address: Some(TEST_CONTRACT.to_string()),
                spec: Some("ERC721".to_string()),
            },
            mint_price: MintPrice { value: Some(price), symbol: Some("ETH".to_string()) },
            extension_address721: Some(AddressValue { value: Some(TEST_EXTENSION.to_string()) }),
            wallet_max: Some(wallet_max),
            ..Default::default()
        },
    }
}

/// Build an offering on [`TEST_CONTRACT`] through [`TEST_EXTENSION`].
pub fn test_offering(id: &str, instance_id: u64, price: U256, wallet_max: u32) -> ClaimOffering {
    ClaimOffering::new(id, instance_id, TEST_CONTRACT, TEST_EXTENSION, price, wallet_max)
        .with_title(id.to_uppercase())
}

/// Two offerings: `a` at 1 ETH and `b` at 0.01 ETH, both capped at five
/// per wallet.
pub fn test_catalog() -> Catalog {
    let offerings: Vec<Offering> = vec![
        test_offering("a", 1, ONE_ETH, 5).into(),
        test_offering("b", 2, ONE_ETH / U256::from(100), 5).into(),
    ];
    Catalog::new(offerings)
}

/// A claim list with one enabled entry per `(id, claim id)` pair.
pub fn test_claim_ids(entries: &[(&str, u64)]) -> ClaimIds {
    ClaimIds::new(entries.iter().map(|(id, claim_id)| ClaimConfig::new(*id, *claim_id)).collect())
}

/// A mock [`ClaimSource`] serving canned claims and recording requests.
///
/// Unknown claims fail with [`CatalogError::NotFound`].
#[derive(Debug, Clone, Default)]
pub struct MockClaimSource {
    claims: HashMap<u64, InstanceData>,
    requests: Arc<Mutex<Vec<u64>>>,
}

impl MockClaimSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `data` for `instance_id`.
    pub fn with_claim(mut self, instance_id: u64, data: InstanceData) -> Self {
        self.claims.insert(instance_id, data);
        self
    }

    /// Get every requested claim id, in order.
    pub fn requests(&self) -> Vec<u64> {
        self.requests.lock().unwrap().clone()
    }
}

impl ClaimSource for MockClaimSource {
    type Error = CatalogError;

    async fn fetch_claim(&self, instance_id: u64) -> Result<InstanceData, Self::Error> {
        self.requests.lock().unwrap().push(instance_id);
        self.claims.get(&instance_id).cloned().ok_or(CatalogError::NotFound)
    }
}
