//! Storefront types used throughout mintcart: offerings and the catalog,
//! the cart, checkout outcomes, and configuration.

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
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod cart;
pub use cart::{Cart, CartError, CartLine};

mod catalog;
pub use catalog::Catalog;

pub mod config;
pub use config::{ClaimConfig, ClaimIds, ConfigError, MarketplaceConfig};

mod offering;
pub use offering::{ClaimOffering, Offering, UnavailableOffering, DEFAULT_DESCRIPTION};

mod outcome;
pub use outcome::{CheckoutResult, CheckoutSummary, PurchaseOutcome, PurchaseStatus};

mod price;
pub use price::{format_amount, format_price};
