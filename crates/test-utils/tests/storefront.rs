use alloy::primitives::U256;
use mintcart_calldata::{MINT_BATCH_SELECTOR, MINT_SELECTOR};
use mintcart_catalog::CatalogLoader;
use mintcart_checkout::{ProviderError, Storefront};
use mintcart_constants::NetworkTarget;
use mintcart_test_utils::{
    claims::{instance_data, MockClaimSource, ONE_ETH, TEST_EXTENSION},
    init_tracing,
    wallet::{MockWallet, WalletCall},
};
use mintcart_types::{ClaimIds, MarketplaceConfig, PurchaseStatus};

const CLAIM_IDS: &str = r#"{
    "collections": [
        { "id": "pass", "claimId": "100", "enabled": true, "customTitle": "Season Pass" },
        { "id": "poster", "claimId": "200", "enabled": true },
        { "id": "ghost", "claimId": "300", "enabled": true },
        { "id": "hidden", "claimId": "400", "enabled": false }
    ],
    "metadata": { "version": "1.0.0" }
}"#;

#[tokio::test]
async fn browse_fill_cart_and_check_out() {
    init_tracing();

    let claims = ClaimIds::from_json(CLAIM_IDS).unwrap();
    let source = MockClaimSource::new()
        .with_claim(100, instance_data(100, ONE_ETH, 3))
        .with_claim(200, instance_data(200, U256::ZERO, 10));
    let catalog = CatalogLoader::new(source).load(&claims).await;

    assert_eq!(catalog.len(), 3);
    assert!(!catalog.get("ghost").unwrap().is_available());
    assert_eq!(catalog.get("pass").unwrap().title(), "Season Pass");

    let network = NetworkTarget::test();
    let config = MarketplaceConfig::new(network.clone()).with_client_id("client");
    let mut store = Storefront::new(config, catalog);

    store.add_to_cart("pass").unwrap();
    store.add_to_cart("pass").unwrap();
    store.add_to_cart("poster").unwrap();
    assert!(store.add_to_cart("ghost").is_err());

    // The wallet starts on mainnet and does not know the test network.
    let wallet = MockWallet::new(1).with_switch_error(ProviderError::UNRECOGNIZED_CHAIN);
    store.connect(wallet.clone());

    let result = store.checkout().await.unwrap();
    assert_eq!(result.summary().to_string(), "All purchases successful! (2/2)");
    assert!(matches!(result.outcomes()[0].status(), PurchaseStatus::Submitted(_)));
    assert!(store.cart().is_empty());

    let calls = wallet.calls();
    assert_eq!(calls[2], WalletCall::AddChain(network.chain_id()));
    assert_eq!(wallet.current_chain_id(), network.chain_id());

    let txs = wallet.transactions();
    assert_eq!(txs.len(), 2);
    assert!(txs.iter().all(|tx| tx.to() == TEST_EXTENSION));
    assert_eq!(txs[0].data()[..4], MINT_BATCH_SELECTOR);
    assert_eq!(txs[0].value(), U256::from(0x1bc4fae5f38e8000u64));
    assert_eq!(txs[1].data()[..4], MINT_SELECTOR);
    assert_eq!(txs[1].value(), U256::from(500_000_000_000_000u64));
}
