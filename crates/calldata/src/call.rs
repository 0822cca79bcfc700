use alloy::primitives::{Address, Bytes, U256};

/// A fully encoded contract call, ready to be handed to a wallet.
///
/// Built fresh for every submission, since quantity and recipient vary per
/// call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedCall {
    /// The contract being invoked.
    to: Address,
    /// Native currency attached to the call, in base units.
    value: U256,
    /// ABI-encoded calldata.
    data: Bytes,
    /// Gas limit.
    gas: u64,
}

impl EncodedCall {
    /// Create a new encoded call.
    pub const fn new(to: Address, value: U256, data: Bytes, gas: u64) -> Self {
        Self { to, value, data, gas }
    }

    /// Get the target address.
    pub const fn to(&self) -> Address {
        self.to
    }

    /// Get the value to attach.
    pub const fn value(&self) -> U256 {
        self.value
    }

    /// Get the calldata.
    pub const fn data(&self) -> &Bytes {
        &self.data
    }

    /// Get the gas limit.
    pub const fn gas(&self) -> u64 {
        self.gas
    }

    /// Calldata as lower-case hex with a `0x` prefix.
    pub fn data_hex(&self) -> String {
        self.data.to_string()
    }

    /// Value as a `0x`-prefixed hex quantity without leading zeros.
    pub fn value_hex(&self) -> String {
        format!("0x{:x}", self.value)
    }

    /// Split into `(to, value, data, gas)`.
    pub fn into_parts(self) -> (Address, U256, Bytes, u64) {
        (self.to, self.value, self.data, self.gas)
    }
}
