use alloy::transports::{RpcError, TransportError};

/// Errors returned by a [`WalletProvider`].
///
/// [`WalletProvider`]: crate::WalletProvider
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// The wallet does not know the requested chain.
    #[error("unrecognized chain")]
    UnrecognizedChain,
    /// The user rejected the request.
    #[error("user rejected the request")]
    UserRejected,
    /// The wallet returned an error response.
    #[error("provider error {code}: {message}")]
    Rpc {
        /// Error code.
        code: i64,
        /// Error message.
        message: String,
    },
    /// The wallet could not be reached, or its response was malformed.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn core::error::Error + Send + Sync>),
}

impl ProviderError {
    /// EIP-1193 code for a request the user rejected.
    pub const USER_REJECTED: i64 = 4001;

    /// Code returned by `wallet_switchEthereumChain` for a chain the wallet
    /// has not been told about.
    pub const UNRECOGNIZED_CHAIN: i64 = 4902;

    /// Classify an error response by its code.
    pub fn from_code(code: i64, message: impl Into<String>) -> Self {
        match code {
            Self::UNRECOGNIZED_CHAIN => Self::UnrecognizedChain,
            Self::USER_REJECTED => Self::UserRejected,
            _ => Self::Rpc { code, message: message.into() },
        }
    }

    /// Wrap a transport failure.
    pub fn transport<E>(err: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Self::Transport(Box::new(err))
    }

    /// Get the error code, if the wallet returned one.
    pub const fn code(&self) -> Option<i64> {
        match self {
            Self::UnrecognizedChain => Some(Self::UNRECOGNIZED_CHAIN),
            Self::UserRejected => Some(Self::USER_REJECTED),
            Self::Rpc { code, .. } => Some(*code),
            Self::Transport(_) => None,
        }
    }

    /// True if the wallet does not know the requested chain.
    pub const fn is_unrecognized_chain(&self) -> bool {
        matches!(self, Self::UnrecognizedChain)
    }
}

impl From<TransportError> for ProviderError {
    fn from(err: TransportError) -> Self {
        match err {
            RpcError::ErrorResp(payload) => Self::from_code(payload.code, payload.message),
            err => Self::transport(err),
        }
    }
}
