//! A scriptable [`WalletProvider`] that records every request.
use alloy::primitives::{Address, TxHash};
use mintcart_checkout::{ProviderError, TransactionParams, WalletProvider};
use mintcart_constants::NetworkTarget;
use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

/// The account the mock wallet exposes by default.
pub const TEST_ACCOUNT: Address = Address::repeat_byte(0xaa);

/// A request received by [`MockWallet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletCall {
    /// `eth_chainId`
    ChainId,
    /// `eth_requestAccounts`
    RequestAccounts,
    /// `wallet_switchEthereumChain`
    SwitchChain(u64),
    /// `wallet_addEthereumChain`
    AddChain(u64),
    /// `eth_sendTransaction`
    SendTransaction(TransactionParams),
}

#[derive(Debug)]
struct State {
    chain_id: u64,
    accounts: Vec<Address>,
    calls: Vec<WalletCall>,
    chain_id_error: Option<i64>,
    accounts_error: Option<i64>,
    switch_error: Option<i64>,
    add_error: Option<i64>,
    failing_sends: HashSet<usize>,
    sends: usize,
}

/// A mock wallet.
///
/// Errors are scripted by EIP-1193 code and turned into [`ProviderError`]s
/// with [`ProviderError::from_code`]. A successful switch or add moves the
/// wallet to the requested chain. Transaction hashes are deterministic: the
/// n-th send (zero-based) returns a hash whose last byte is `n + 1`.
#[derive(Debug, Clone)]
pub struct MockWallet {
    state: Arc<Mutex<State>>,
}

impl MockWallet {
    /// Create a wallet on `chain_id` exposing [`TEST_ACCOUNT`].
    pub fn new(chain_id: u64) -> Self {
        Self {
            state: Arc::new(Mutex::new(State {
                chain_id,
                accounts: vec![TEST_ACCOUNT],
                calls: vec![],
                chain_id_error: None,
                accounts_error: None,
                switch_error: None,
                add_error: None,
                failing_sends: HashSet::new(),
                sends: 0,
            })),
        }
    }

    /// Create a wallet already on `network`.
    pub fn on(network: &NetworkTarget) -> Self {
        Self::new(network.chain_id())
    }

    fn update(self, f: impl FnOnce(&mut State)) -> Self {
        f(&mut *self.state.lock().unwrap());
        self
    }

    /// Expose these accounts instead of [`TEST_ACCOUNT`].
    pub fn with_accounts(self, accounts: Vec<Address>) -> Self {
        self.update(|state| state.accounts = accounts)
    }

    /// Fail `eth_chainId` with `code`.
    pub fn with_chain_id_error(self, code: i64) -> Self {
        self.update(|state| state.chain_id_error = Some(code))
    }

    /// Fail `eth_requestAccounts` with `code`.
    pub fn with_accounts_error(self, code: i64) -> Self {
        self.update(|state| state.accounts_error = Some(code))
    }

    /// Fail `wallet_switchEthereumChain` with `code`.
    pub fn with_switch_error(self, code: i64) -> Self {
        self.update(|state| state.switch_error = Some(code))
    }

    /// Fail `wallet_addEthereumChain` with `code`.
    pub fn with_add_error(self, code: i64) -> Self {
        self.update(|state| state.add_error = Some(code))
    }

    /// Reject the `index`-th transaction (zero-based) as if the user
    /// declined it.
    pub fn with_failing_send(self, index: usize) -> Self {
        self.update(|state| {
            state.failing_sends.insert(index);
        })
    }

    /// Get the chain the wallet is on.
    pub fn current_chain_id(&self) -> u64 {
        self.state.lock().unwrap().chain_id
    }

    /// Get every request received, in order.
    pub fn calls(&self) -> Vec<WalletCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Get every transaction received, failed ones included.
    pub fn transactions(&self) -> Vec<TransactionParams> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                WalletCall::SendTransaction(tx) => Some(tx),
                _ => None,
            })
            .collect()
    }

    /// The hash returned for the `index`-th send.
    pub fn tx_hash(index: usize) -> TxHash {
        TxHash::left_padding_from(&(index as u64 + 1).to_be_bytes())
    }

    fn fail(code: i64) -> ProviderError {
        ProviderError::from_code(code, "mock wallet failure")
    }
}

impl WalletProvider for MockWallet {
    async fn chain_id(&self) -> Result<u64, ProviderError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(WalletCall::ChainId);
        match state.chain_id_error {
            Some(code) => Err(Self::fail(code)),
            None => Ok(state.chain_id),
        }
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(WalletCall::RequestAccounts);
        match state.accounts_error {
            Some(code) => Err(Self::fail(code)),
            None => Ok(state.accounts.clone()),
        }
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<(), ProviderError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(WalletCall::SwitchChain(chain_id));
        if let Some(code) = state.switch_error {
            return Err(Self::fail(code));
        }
        state.chain_id = chain_id;
        Ok(())
    }

    async fn add_chain(&self, network: &NetworkTarget) -> Result<(), ProviderError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(WalletCall::AddChain(network.chain_id()));
        if let Some(code) = state.add_error {
            return Err(Self::fail(code));
        }
        state.chain_id = network.chain_id();
        Ok(())
    }

    async fn send_transaction(&self, tx: TransactionParams) -> Result<TxHash, ProviderError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(WalletCall::SendTransaction(tx));
        let index = state.sends;
        state.sends += 1;
        if state.failing_sends.contains(&index) {
            return Err(Self::fail(ProviderError::USER_REJECTED));
        }
        Ok(Self::tx_hash(index))
    }
}
