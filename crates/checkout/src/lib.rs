//! Checkout for mintcart.
//!
//! Contains the [`WalletProvider`] abstraction over an EIP-1193 wallet, the
//! [`NetworkGuard`] that puts the wallet on the storefront's network, the
//! [`Checkout`] orchestrator that turns a cart into mint transactions, and
//! the [`Storefront`] session that ties catalog, cart and checkout together.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod checkout;
pub use checkout::{Checkout, CheckoutError, CheckoutOptions, CheckoutState, PurchaseError};

mod error;
pub use error::ProviderError;

mod impls;
pub use impls::RpcWallet;

mod network;
pub use network::{NetworkError, NetworkGuard, NetworkStatus};

mod params;
pub use params::{AddChainParams, SwitchChainParams, TransactionParams};

mod session;
pub use session::Storefront;

mod traits;
pub use traits::WalletProvider;
