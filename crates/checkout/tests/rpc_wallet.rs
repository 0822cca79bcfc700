use alloy::{
    primitives::{Address, Bytes, TxHash, U256, U64},
    providers::ProviderBuilder,
    rpc::json_rpc::ErrorPayload,
    transports::mock::Asserter,
};
use mintcart_checkout::{
    NetworkGuard, NetworkStatus, ProviderError, RpcWallet, TransactionParams, WalletProvider,
};
use mintcart_constants::NetworkTarget;

fn wallet() -> (RpcWallet<impl alloy::providers::Provider>, Asserter) {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone());
    (RpcWallet::new(provider), asserter)
}

fn failure(code: i64, message: &'static str) -> ErrorPayload {
    ErrorPayload { code, message: message.into(), data: None }
}

#[tokio::test]
async fn reads_chain_id() {
    let (wallet, asserter) = wallet();
    asserter.push_success(&U64::from(137));

    assert_eq!(wallet.chain_id().await.unwrap(), 137);
}

#[tokio::test]
async fn requests_accounts() {
    let (wallet, asserter) = wallet();
    let accounts = vec![Address::repeat_byte(1), Address::repeat_byte(2)];
    asserter.push_success(&accounts);

    assert_eq!(wallet.request_accounts().await.unwrap(), accounts);
}

#[tokio::test]
async fn maps_error_codes() {
    let (wallet, asserter) = wallet();
    asserter.push_failure(failure(4902, "Unrecognized chain ID"));
    asserter.push_failure(failure(4001, "User rejected the request."));
    asserter.push_failure(failure(-32603, "Internal error"));

    assert!(wallet.switch_chain(8453).await.unwrap_err().is_unrecognized_chain());
    assert!(matches!(wallet.switch_chain(8453).await, Err(ProviderError::UserRejected)));
    assert!(matches!(
        wallet.switch_chain(8453).await,
        Err(ProviderError::Rpc { code: -32603, .. })
    ));
}

#[tokio::test]
async fn sends_transaction() {
    let (wallet, asserter) = wallet();
    let hash = TxHash::repeat_byte(0xab);
    asserter.push_success(&hash);

    let tx = TransactionParams::new(
        Address::repeat_byte(1),
        Address::repeat_byte(2),
        U256::from(1),
        Bytes::from_static(&[0xfa, 0x2b, 0x06, 0x8f]),
        350_000,
    );
    assert_eq!(wallet.send_transaction(tx).await.unwrap(), hash);
}

#[tokio::test]
async fn guard_adds_chain_through_rpc() {
    let (wallet, asserter) = wallet();
    asserter.push_success(&U64::from(1));
    asserter.push_failure(failure(4902, "Unrecognized chain ID"));
    asserter.push_success(&());

    let guard = NetworkGuard::new(NetworkTarget::for_chain_id(137));
    assert_eq!(guard.ensure(&wallet).await.unwrap(), NetworkStatus::Added);
}
