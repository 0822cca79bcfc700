use crate::EncodingError;
use alloy::primitives::Address;

/// Parse a hex address, ignoring case and an optional `0x` prefix.
///
/// Checksums are not enforced: wallets and the claim API return addresses
/// in whatever case they like.
pub fn parse_address(input: &str) -> Result<Address, EncodingError> {
    let trimmed = input.trim();
    let hex = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if hex.len() != 40 {
        return Err(EncodingError::InvalidAddress {
            input: input.to_string(),
            reason: format!("expected 40 hex characters, got {}", hex.len()),
        });
    }

    hex.to_ascii_lowercase().parse::<Address>().map_err(|e| EncodingError::InvalidAddress {
        input: input.to_string(),
        reason: e.to_string(),
    })
}
