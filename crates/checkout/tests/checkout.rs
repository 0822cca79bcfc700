use alloy::primitives::{Address, U256};
use mintcart_calldata::{batch_mint_len, MINT_BATCH_SELECTOR, MINT_SELECTOR, SINGLE_MINT_LEN};
use mintcart_checkout::{Checkout, CheckoutError, CheckoutOptions, CheckoutState, NetworkError};
use mintcart_constants::{gas_limit_for, NetworkTarget};
use mintcart_test_utils::{
    claims::{test_offering, ONE_ETH, TEST_EXTENSION},
    init_tracing,
    wallet::{MockWallet, WalletCall, TEST_ACCOUNT},
};
use mintcart_types::{Cart, CheckoutSummary, PurchaseStatus};
use std::sync::Arc;

fn checkout(wallet: MockWallet) -> Checkout<MockWallet> {
    Checkout::new(NetworkTarget::test(), CheckoutOptions::default()).with_provider(wallet)
}

fn cart(lines: &[(&str, u64, U256, u32)]) -> Cart {
    let mut cart = Cart::new();
    for (id, instance_id, price, quantity) in lines {
        let offering = Arc::new(test_offering(id, *instance_id, *price, 10));
        for _ in 0..*quantity {
            cart.add(&offering).unwrap();
        }
    }
    cart
}

#[tokio::test]
async fn empty_cart_makes_no_calls() {
    let wallet = MockWallet::on(&NetworkTarget::test());
    let checkout = checkout(wallet.clone());

    let err = checkout.checkout(&mut Cart::new()).await.unwrap_err();
    assert!(matches!(err, CheckoutError::EmptyCart));
    assert!(wallet.calls().is_empty());
}

#[tokio::test]
async fn no_provider() {
    let checkout: Checkout<MockWallet> =
        Checkout::new(NetworkTarget::test(), CheckoutOptions::default());
    let mut cart = cart(&[("a", 1, ONE_ETH, 1)]);

    let err = checkout.checkout(&mut cart).await.unwrap_err();
    assert!(matches!(err, CheckoutError::NoProvider));
    assert_eq!(cart.len(), 1);
}

#[tokio::test]
async fn value_includes_fee_per_token() {
    init_tracing();

    let wallet = MockWallet::on(&NetworkTarget::test());
    let checkout = checkout(wallet.clone());
    let mut cart = cart(&[("a", 7, ONE_ETH, 2)]);

    let result = checkout.checkout(&mut cart).await.unwrap();
    assert_eq!(result.summary(), CheckoutSummary::AllSucceeded { total: 1 });
    assert_eq!(result.total_cost(), U256::from(0x1bc4fae5f38e8000u64));

    let txs = wallet.transactions();
    assert_eq!(txs.len(), 1);
    let tx = &txs[0];
    assert_eq!(tx.from(), TEST_ACCOUNT);
    assert_eq!(tx.to(), TEST_EXTENSION);
    assert_eq!(tx.value(), U256::from(0x1bc4fae5f38e8000u64));
    assert_eq!(tx.gas(), 400_000);
    assert_eq!(tx.gas(), gas_limit_for(2));
    assert_eq!(tx.data()[..4], MINT_BATCH_SELECTOR);
    assert_eq!(tx.data().len(), batch_mint_len(2));
}

#[tokio::test]
async fn single_token_uses_mint() {
    let wallet = MockWallet::on(&NetworkTarget::test());
    let checkout = checkout(wallet.clone());
    let mut cart = cart(&[("a", 7, U256::ZERO, 1)]);

    checkout.checkout(&mut cart).await.unwrap();

    let tx = &wallet.transactions()[0];
    assert_eq!(tx.data()[..4], MINT_SELECTOR);
    assert_eq!(tx.data().len(), SINGLE_MINT_LEN);
    assert_eq!(tx.gas(), 350_000);
    // Free claims still carry the platform fee.
    assert_eq!(tx.value(), U256::from(500_000_000_000_000u64));
}

#[tokio::test]
async fn failed_line_does_not_stop_the_rest() {
    let wallet = MockWallet::on(&NetworkTarget::test()).with_failing_send(1);
    let checkout = checkout(wallet.clone());
    let mut cart = cart(&[("a", 1, ONE_ETH, 1), ("b", 2, ONE_ETH, 1), ("c", 3, ONE_ETH, 3)]);

    let result = checkout.checkout(&mut cart).await.unwrap();

    let outcomes = result.outcomes();
    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0].title(), "A");
    assert_eq!(outcomes[0].tx_hash(), Some(MockWallet::tx_hash(0)));
    assert_eq!(outcomes[1].title(), "B");
    assert!(matches!(outcomes[1].status(), PurchaseStatus::Failed(_)));
    assert_eq!(outcomes[2].tx_hash(), Some(MockWallet::tx_hash(2)));
    assert_eq!(outcomes[2].quantity(), 3);

    assert_eq!(result.summary(), CheckoutSummary::Partial { successes: 2, total: 3 });
    assert_eq!(result.summary().to_string(), "Partial success: 2/3 purchases completed");
    assert!(cart.is_empty());
}

#[tokio::test]
async fn all_failed_still_clears_the_cart() {
    let wallet = MockWallet::on(&NetworkTarget::test()).with_failing_send(0);
    let checkout = checkout(wallet.clone());
    let mut cart = cart(&[("a", 1, ONE_ETH, 1)]);

    let result = checkout.checkout(&mut cart).await.unwrap();
    assert_eq!(result.summary().to_string(), "All purchases failed (0/1)");
    assert_eq!(result.outcomes()[0].error(), Some("user rejected the request"));
    assert!(cart.is_empty());
}

#[tokio::test]
async fn lines_are_submitted_in_cart_order() {
    let wallet = MockWallet::on(&NetworkTarget::test());
    let checkout = checkout(wallet.clone());
    let mut cart = cart(&[("b", 2, ONE_ETH, 1), ("a", 1, ONE_ETH, 2)]);

    checkout.checkout(&mut cart).await.unwrap();

    let calls = wallet.calls();
    assert_eq!(calls[0], WalletCall::ChainId);
    assert_eq!(calls[1], WalletCall::RequestAccounts);
    let lengths: Vec<_> = wallet.transactions().iter().map(|tx| tx.data().len()).collect();
    assert_eq!(lengths, [SINGLE_MINT_LEN, batch_mint_len(2)]);
}

#[tokio::test]
async fn network_failure_aborts_before_any_line() {
    let wallet = MockWallet::new(1).with_switch_error(4001);
    let checkout = checkout(wallet.clone());
    let mut cart = cart(&[("a", 1, ONE_ETH, 1)]);

    let err = checkout.checkout(&mut cart).await.unwrap_err();
    let CheckoutError::Network(NetworkError::Mismatch { network, .. }) = err else {
        panic!("expected network mismatch, got {err:?}");
    };
    assert_eq!(network, "Test Network");
    assert!(wallet.transactions().is_empty());
    assert_eq!(cart.len(), 1);
    assert_eq!(checkout.state(), CheckoutState::Idle);
}

#[tokio::test]
async fn switches_then_submits() {
    let wallet = MockWallet::new(1);
    let checkout = checkout(wallet.clone());
    let mut cart = cart(&[("a", 1, ONE_ETH, 1)]);

    checkout.checkout(&mut cart).await.unwrap();
    assert_eq!(wallet.current_chain_id(), NetworkTarget::test().chain_id());
    assert_eq!(wallet.calls()[1], WalletCall::SwitchChain(NetworkTarget::test().chain_id()));
}

#[tokio::test]
async fn no_accounts() {
    let wallet = MockWallet::on(&NetworkTarget::test()).with_accounts(vec![]);
    let checkout = checkout(wallet.clone());
    let mut cart = cart(&[("a", 1, ONE_ETH, 1)]);

    let err = checkout.checkout(&mut cart).await.unwrap_err();
    assert!(matches!(err, CheckoutError::NoAccounts));
    assert!(wallet.transactions().is_empty());
}

#[tokio::test]
async fn accounts_error() {
    let wallet = MockWallet::on(&NetworkTarget::test()).with_accounts_error(4001);
    let checkout = checkout(wallet);
    let mut cart = cart(&[("a", 1, ONE_ETH, 1)]);

    let err = checkout.checkout(&mut cart).await.unwrap_err();
    assert!(matches!(err, CheckoutError::Accounts(_)));
}

#[tokio::test]
async fn first_account_is_sender_and_recipient() {
    let first = Address::repeat_byte(0x01);
    let wallet = MockWallet::on(&NetworkTarget::test())
        .with_accounts(vec![first, Address::repeat_byte(0x02)]);
    let checkout = checkout(wallet.clone());
    let mut cart = cart(&[("a", 1, ONE_ETH, 1)]);

    checkout.checkout(&mut cart).await.unwrap();

    let tx = &wallet.transactions()[0];
    assert_eq!(tx.from(), first);
    // Recipient is the last head word of `mint`.
    assert_eq!(tx.data()[4 + 4 * 32 + 12..4 + 5 * 32], first[..]);
}

#[tokio::test]
async fn state_returns_to_idle() {
    let wallet = MockWallet::on(&NetworkTarget::test());
    let checkout = checkout(wallet);
    let mut rx = checkout.subscribe();
    let mut cart = cart(&[("a", 1, ONE_ETH, 1)]);

    checkout.checkout(&mut cart).await.unwrap();

    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), CheckoutState::Idle);
    assert_eq!(checkout.state(), CheckoutState::Idle);
}

#[tokio::test]
async fn overflowing_value_fails_only_that_line() {
    let wallet = MockWallet::on(&NetworkTarget::test());
    let checkout = checkout(wallet.clone());
    let mut cart = cart(&[("a", 1, U256::MAX, 2), ("b", 2, ONE_ETH, 1)]);

    let result = checkout.checkout(&mut cart).await.unwrap();
    assert_eq!(result.outcomes()[0].error(), Some("transaction value overflows"));
    assert!(result.outcomes()[1].is_success());
    assert_eq!(wallet.transactions().len(), 1);
}
