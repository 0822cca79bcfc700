use crate::{ProviderError, TransactionParams};
use alloy::primitives::{Address, TxHash};
use core::future::Future;
use mintcart_constants::NetworkTarget;

/// A wallet that can report and change its network, expose accounts, and
/// send transactions on behalf of the user.
///
/// The methods mirror the EIP-1193 requests the checkout relies on:
/// `eth_chainId`, `eth_requestAccounts`, `wallet_switchEthereumChain`,
/// `wallet_addEthereumChain` and `eth_sendTransaction`.
pub trait WalletProvider {
    /// Get the chain ID the wallet is connected to.
    fn chain_id(&self) -> impl Future<Output = Result<u64, ProviderError>> + Send;

    /// Ask the wallet for its accounts. The first one is the active account.
    fn request_accounts(&self) -> impl Future<Output = Result<Vec<Address>, ProviderError>> + Send;

    /// Ask the wallet to switch to `chain_id`.
    ///
    /// Fails with [`ProviderError::UnrecognizedChain`] when the wallet does
    /// not know the chain.
    fn switch_chain(&self, chain_id: u64) -> impl Future<Output = Result<(), ProviderError>> + Send;

    /// Ask the wallet to register `network` and switch to it.
    fn add_chain(
        &self,
        network: &NetworkTarget,
    ) -> impl Future<Output = Result<(), ProviderError>> + Send;

    /// Ask the wallet to sign and send a transaction.
    fn send_transaction(
        &self,
        tx: TransactionParams,
    ) -> impl Future<Output = Result<TxHash, ProviderError>> + Send;
}
