use crate::{NetworkError, NetworkGuard, ProviderError, TransactionParams, WalletProvider};
use alloy::primitives::{Address, TxHash, U256};
use mintcart_calldata::{encode_mint, EncodedCall, EncodingError};
use mintcart_constants::{NetworkTarget, BASE_GAS_LIMIT, GAS_PER_TOKEN, PLATFORM_FEE_PER_TOKEN};
use mintcart_types::{Cart, CartLine, CheckoutResult, PurchaseOutcome};
use tokio::sync::watch;
use tracing::{info, instrument, warn};

/// Errors that stop a checkout before or while preparing it. Failures of
/// individual lines are reported in the [`CheckoutResult`] instead.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CheckoutError {
    /// No wallet is connected.
    #[error("no wallet connected")]
    NoProvider,
    /// The cart has no lines.
    #[error("cart is empty")]
    EmptyCart,
    /// The wallet could not be put on the storefront's network.
    #[error(transparent)]
    Network(#[from] NetworkError),
    /// The wallet returned no accounts.
    #[error("no accounts found, please connect your wallet")]
    NoAccounts,
    /// The wallet failed to return its accounts.
    #[error("failed to get accounts: {0}")]
    Accounts(#[source] ProviderError),
}

/// Why a single cart line could not be purchased.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PurchaseError {
    /// The mint calldata could not be built.
    #[error(transparent)]
    Encoding(#[from] EncodingError),
    /// Price times quantity does not fit in 256 bits.
    #[error("transaction value overflows")]
    ValueOverflow,
    /// The wallet did not send the transaction.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// Fee and gas parameters of a checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutOptions {
    /// Platform fee added per token, in base units.
    pub fee_per_token: U256,
    /// Gas limit attached to every transaction.
    pub base_gas: u64,
    /// Gas limit added per token.
    pub gas_per_token: u64,
}

impl Default for CheckoutOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutOptions {
    /// Create options with the platform defaults.
    pub const fn new() -> Self {
        Self {
            fee_per_token: PLATFORM_FEE_PER_TOKEN,
            base_gas: BASE_GAS_LIMIT,
            gas_per_token: GAS_PER_TOKEN,
        }
    }

    /// Set the platform fee per token.
    pub const fn with_fee_per_token(mut self, fee: U256) -> Self {
        self.fee_per_token = fee;
        self
    }

    /// Set the base gas limit and the per-token increment.
    pub const fn with_gas(mut self, base_gas: u64, gas_per_token: u64) -> Self {
        self.base_gas = base_gas;
        self.gas_per_token = gas_per_token;
        self
    }

    /// Gas limit for a mint of `quantity` tokens.
    pub const fn gas_limit(&self, quantity: u32) -> u64 {
        self.base_gas.saturating_add(self.gas_per_token.saturating_mul(quantity as u64))
    }
}

/// Progress of the checkout, observable through [`Checkout::subscribe`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum CheckoutState {
    /// No checkout is running.
    #[default]
    Idle,
    /// Verifying the wallet's network.
    NetworkChecking,
    /// Requesting the wallet's accounts.
    AccountResolving,
    /// Submitting the line at `index` of `total`.
    Submitting {
        /// Zero-based index of the line being submitted.
        index: usize,
        /// Number of lines.
        total: usize,
        /// Cost of the whole cart, fees included.
        total_cost: U256,
    },
}

impl CheckoutState {
    /// True if a checkout is running.
    pub const fn is_busy(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Publishes [`CheckoutState::Idle`] when dropped, so every exit path of a
/// checkout, cancellation included, leaves the state idle.
struct IdleOnDrop<'a>(&'a watch::Sender<CheckoutState>);

impl Drop for IdleOnDrop<'_> {
    fn drop(&mut self) {
        self.0.send_replace(CheckoutState::Idle);
    }
}

/// Turns a cart into mint transactions sent through a [`WalletProvider`].
///
/// Lines are submitted one at a time, in cart order. A failing line is
/// recorded and the remaining lines are still attempted.
#[derive(Debug)]
pub struct Checkout<P> {
    provider: Option<P>,
    guard: NetworkGuard,
    options: CheckoutOptions,
    state: watch::Sender<CheckoutState>,
}

impl<P> Checkout<P> {
    /// Create a checkout for `network` without a connected wallet.
    pub fn new(network: NetworkTarget, options: CheckoutOptions) -> Self {
        let (state, _) = watch::channel(CheckoutState::Idle);
        Self { provider: None, guard: NetworkGuard::new(network), options, state }
    }

    /// Set the wallet.
    pub fn with_provider(mut self, provider: P) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Connect a wallet, replacing the current one.
    pub fn connect(&mut self, provider: P) -> Option<P> {
        self.provider.replace(provider)
    }

    /// Disconnect the wallet.
    pub fn disconnect(&mut self) -> Option<P> {
        self.provider.take()
    }

    /// Get a reference to the wallet, if connected.
    pub const fn provider(&self) -> Option<&P> {
        self.provider.as_ref()
    }

    /// Get a reference to the network guard.
    pub const fn guard(&self) -> &NetworkGuard {
        &self.guard
    }

    /// Get the checkout options.
    pub const fn options(&self) -> &CheckoutOptions {
        &self.options
    }

    /// Get the current state.
    pub fn state(&self) -> CheckoutState {
        *self.state.borrow()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<CheckoutState> {
        self.state.subscribe()
    }

    /// Cost of the whole cart, fees included. Saturates on overflow.
    pub fn total_cost(&self, lines: &[CartLine]) -> U256 {
        lines.iter().fold(U256::ZERO, |acc, line| {
            acc.saturating_add(line.cost(self.options.fee_per_token).unwrap_or(U256::MAX))
        })
    }

    /// Build the mint call for one line, minting to `recipient`.
    ///
    /// The call targets the claim extension. Its value is the token price
    /// plus the platform fee, both per token.
    pub fn prepare_call(
        &self,
        recipient: Address,
        line: &CartLine,
    ) -> Result<EncodedCall, PurchaseError> {
        let offering = line.offering();
        let quantity = line.quantity();

        let data = encode_mint(
            offering.contract_address(),
            U256::from(offering.instance_id()),
            quantity,
            recipient,
        )?;
        let value = offering
            .cost(quantity, self.options.fee_per_token)
            .ok_or(PurchaseError::ValueOverflow)?;
        let gas = self.options.gas_limit(quantity);

        Ok(EncodedCall::new(offering.extension_address(), value, data, gas))
    }
}

impl<P> Checkout<P>
where
    P: WalletProvider + Sync,
{
    async fn purchase(
        &self,
        provider: &P,
        account: Address,
        line: &CartLine,
    ) -> Result<TxHash, PurchaseError> {
        let call = self.prepare_call(account, line)?;
        let tx = TransactionParams::from_call(account, call);
        provider.send_transaction(tx).await.map_err(Into::into)
    }

    /// Purchase every line of `cart`.
    ///
    /// Fails without contacting the wallet when none is connected or the
    /// cart is empty, and before any line is attempted when the network
    /// cannot be verified or no account is available. Once lines have been
    /// processed the cart is cleared, whatever their outcome.
    #[instrument(skip_all, fields(lines = cart.len()))]
    pub async fn checkout(&self, cart: &mut Cart) -> Result<CheckoutResult, CheckoutError> {
        let provider = self.provider.as_ref().ok_or(CheckoutError::NoProvider)?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let _idle = IdleOnDrop(&self.state);

        self.state.send_replace(CheckoutState::NetworkChecking);
        let status = self.guard.ensure(provider).await?;
        info!(%status, network = self.guard.target().name(), "network verified");

        self.state.send_replace(CheckoutState::AccountResolving);
        let accounts = provider.request_accounts().await.map_err(CheckoutError::Accounts)?;
        let account = accounts.first().copied().ok_or(CheckoutError::NoAccounts)?;

        let lines = cart.snapshot();
        let total = lines.len();
        let total_cost = self.total_cost(&lines);
        info!(%account, total, %total_cost, "starting checkout");

        let mut outcomes = Vec::with_capacity(total);
        for (index, line) in lines.iter().enumerate() {
            self.state.send_replace(CheckoutState::Submitting { index, total, total_cost });

            let (title, quantity) = (line.title(), line.quantity());
            let outcome = match self.purchase(provider, account, line).await {
                Ok(tx_hash) => {
                    info!(title, quantity, %tx_hash, "purchase submitted");
                    PurchaseOutcome::submitted(title, quantity, tx_hash)
                }
                Err(err) => {
                    warn!(title, quantity, %err, "purchase failed");
                    PurchaseOutcome::failed(title, quantity, err)
                }
            };
            outcomes.push(outcome);
        }

        cart.clear();

        let result = CheckoutResult::new(outcomes, total_cost);
        info!(summary = %result.summary(), "checkout finished");
        Ok(result)
    }
}
