use alloy::primitives::U256;

/// Flat platform fee charged on top of the token price, per minted token.
/// 0.0005 ETH expressed in wei.
pub const PLATFORM_FEE_PER_TOKEN: U256 = U256::from_limbs([500_000_000_000_000, 0, 0, 0]);

/// Gas allowance attached to every mint transaction, regardless of quantity.
pub const BASE_GAS_LIMIT: u64 = 300_000;

/// Additional gas allowance attached per minted token.
pub const GAS_PER_TOKEN: u64 = 50_000;

/// Gas limit for a mint of `quantity` tokens.
///
/// No estimation is performed against the chain. The limit is a fixed base
/// allowance plus a fixed increment per token.
pub const fn gas_limit_for(quantity: u32) -> u64 {
    BASE_GAS_LIMIT + GAS_PER_TOKEN * quantity as u64
}
