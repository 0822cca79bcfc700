use crate::{AddChainParams, ProviderError, SwitchChainParams, TransactionParams, WalletProvider};
use alloy::{
    primitives::{Address, TxHash, U64},
    providers::Provider,
};
use mintcart_constants::NetworkTarget;
use tracing::instrument;

/// A [`WalletProvider`] backed by an alloy [`Provider`].
///
/// Every wallet operation is sent as a raw JSON-RPC request, so the
/// provider must be connected to something that answers the wallet
/// methods, such as an EIP-1193 bridge or a node with unlocked accounts.
#[derive(Debug, Clone)]
pub struct RpcWallet<P> {
    provider: P,
}

impl<P> RpcWallet<P> {
    /// Wrap an alloy provider.
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Get a reference to the inner provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Unwrap the inner provider.
    pub fn into_inner(self) -> P {
        self.provider
    }
}

impl<P> From<P> for RpcWallet<P> {
    fn from(provider: P) -> Self {
        Self::new(provider)
    }
}

impl<P> WalletProvider for RpcWallet<P>
where
    P: Provider,
{
    async fn chain_id(&self) -> Result<u64, ProviderError> {
        let chain_id: U64 = self.provider.raw_request("eth_chainId".into(), ()).await?;
        Ok(chain_id.to())
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError> {
        self.provider.raw_request("eth_requestAccounts".into(), ()).await.map_err(Into::into)
    }

    #[instrument(skip(self))]
    async fn switch_chain(&self, chain_id: u64) -> Result<(), ProviderError> {
        let params = (SwitchChainParams::new(chain_id),);
        let _: Option<()> =
            self.provider.raw_request("wallet_switchEthereumChain".into(), params).await?;
        Ok(())
    }

    #[instrument(skip_all, fields(chain_id = network.chain_id()))]
    async fn add_chain(&self, network: &NetworkTarget) -> Result<(), ProviderError> {
        let params = (AddChainParams::from(network),);
        let _: Option<()> =
            self.provider.raw_request("wallet_addEthereumChain".into(), params).await?;
        Ok(())
    }

    #[instrument(skip_all, fields(to = %tx.to(), gas = tx.gas()))]
    async fn send_transaction(&self, tx: TransactionParams) -> Result<TxHash, ProviderError> {
        self.provider.raw_request("eth_sendTransaction".into(), (tx,)).await.map_err(Into::into)
    }
}
