//! Calldata for the claim extension's `mint` and `mintBatch` entry points.
//!
//! The two layouts are fixed, so the encoding is written out word by word
//! rather than driven by an ABI description. Both encoders always mint
//! against index 0 with empty merkle proofs; allowlist claims are not
//! supported.

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

mod address;
pub use address::parse_address;

mod call;
pub use call::EncodedCall;

mod error;
pub use error::EncodingError;

mod mint;
pub use mint::{
    batch_mint_len, encode_batch_mint, encode_mint, encode_single_mint, MINT_BATCH_SELECTOR,
    MINT_SELECTOR, SINGLE_MINT_LEN,
};
