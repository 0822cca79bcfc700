//! Claim data for mintcart: the claim API client, its response types, and
//! the loader that turns a claim list into a [`Catalog`].
//!
//! [`Catalog`]: mintcart_types::Catalog

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

/// The [`ClaimApi`] client.
///
/// [`ClaimApi`]: crate::client::ClaimApi
pub mod client;
pub use client::{ClaimApi, MANIFOLD_CLAIM_API_URL};

mod error;
pub use error::{CatalogError, Result};

mod loader;
pub use loader::CatalogLoader;

mod source;
pub use source::ClaimSource;

/// Response types for the [`ClaimApi`].
///
/// [`ClaimApi`]: crate::client::ClaimApi
pub mod types;
pub use types::InstanceData;
