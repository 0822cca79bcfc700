//! mintcart system constants.
//!
//! This crate contains the descriptors of the networks a storefront can
//! target, along with the platform fee and gas allowances attached to every
//! mint transaction.

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

mod chains;
pub use chains::{goerli, mainnet, mumbai, polygon, sepolia};
#[cfg(any(test, feature = "test-utils"))]
pub use chains::test_utils;

mod fees;
pub use fees::{gas_limit_for, BASE_GAS_LIMIT, GAS_PER_TOKEN, PLATFORM_FEE_PER_TOKEN};

mod types;
pub use types::{KnownNetworks, NativeCurrency, NetworkTarget, ParseNetworkError};
