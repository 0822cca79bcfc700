/// Errors returned when calldata cannot be encoded from the given inputs.
///
/// These never occur for quantities and addresses produced by the cart, but
/// they are reported instead of emitting bytes that would revert.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum EncodingError {
    /// Mint quantity is zero or does not fit the contract's `uint16` count.
    #[error("mint quantity must be between 1 and {max}, got {0}", max = u16::MAX)]
    InvalidQuantity(u32),
    /// Address is not 20 bytes of hex.
    #[error("invalid address {input:?}: {reason}")]
    InvalidAddress {
        /// The rejected input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },
}
