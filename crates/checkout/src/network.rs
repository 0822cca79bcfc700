use crate::{ProviderError, WalletProvider};
use core::fmt;
use mintcart_constants::NetworkTarget;
use tracing::{debug, info, instrument, warn};

/// How the wallet ended up on the target network.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NetworkStatus {
    /// The wallet was already on the target network.
    AlreadyActive,
    /// The wallet switched to the target network.
    Switched,
    /// The wallet did not know the network; it was added.
    Added,
}

impl fmt::Display for NetworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyActive => f.write_str("already active"),
            Self::Switched => f.write_str("switched"),
            Self::Added => f.write_str("added"),
        }
    }
}

/// Errors returned by [`NetworkGuard::ensure`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum NetworkError {
    /// The wallet is not on the target network and could not be moved
    /// there.
    #[error("failed to switch to required network: {network}")]
    Mismatch {
        /// Display name of the target network.
        network: String,
        /// The wallet failure.
        #[source]
        source: ProviderError,
    },
}

impl NetworkError {
    fn mismatch(target: &NetworkTarget, source: ProviderError) -> Self {
        Self::Mismatch { network: target.name().to_string(), source }
    }
}

/// Makes sure a wallet is connected to the storefront's network before any
/// transaction is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkGuard {
    target: NetworkTarget,
}

impl NetworkGuard {
    /// Create a guard for `target`.
    pub const fn new(target: NetworkTarget) -> Self {
        Self { target }
    }

    /// Get the target network.
    pub const fn target(&self) -> &NetworkTarget {
        &self.target
    }

    /// Put `provider` on the target network.
    ///
    /// Reads the current chain first and does nothing else when it already
    /// matches. Otherwise asks the wallet to switch, and falls back to
    /// adding the chain when the wallet reports it as unrecognized.
    #[instrument(skip_all, fields(target = self.target.chain_id()))]
    pub async fn ensure<P>(&self, provider: &P) -> Result<NetworkStatus, NetworkError>
    where
        P: WalletProvider + Sync,
    {
        let current =
            provider.chain_id().await.map_err(|err| NetworkError::mismatch(&self.target, err))?;

        if current == self.target.chain_id() {
            debug!("wallet already on target network");
            return Ok(NetworkStatus::AlreadyActive);
        }

        info!(current, "switching wallet network");
        match provider.switch_chain(self.target.chain_id()).await {
            Ok(()) => Ok(NetworkStatus::Switched),
            Err(err) if err.is_unrecognized_chain() => {
                info!(network = self.target.name(), "network unknown to wallet, adding it");
                provider
                    .add_chain(&self.target)
                    .await
                    .map(|()| NetworkStatus::Added)
                    .inspect_err(|err| warn!(%err, "failed to add network"))
                    .map_err(|err| NetworkError::mismatch(&self.target, err))
            }
            Err(err) => {
                warn!(%err, "failed to switch network");
                Err(NetworkError::mismatch(&self.target, err))
            }
        }
    }
}
