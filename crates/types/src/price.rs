use alloy::primitives::U256;

/// Decimals of the base unit of every supported native currency.
const BASE_DECIMALS: u32 = 18;

/// Format a base-unit amount with `shown` decimals, rounding down.
///
/// `shown` is capped at 18. Integer arithmetic only, so large amounts do not
/// lose precision.
pub fn format_amount(wei: U256, shown: u32, symbol: &str) -> String {
    let shown = shown.min(BASE_DECIMALS);
    let unit = U256::from(10u64).pow(U256::from(BASE_DECIMALS));
    let whole = wei / unit;

    if shown == 0 {
        return format!("{whole} {symbol}");
    }

    let step = U256::from(10u64).pow(U256::from(BASE_DECIMALS - shown));
    let frac = (wei % unit) / step;
    format!("{whole}.{frac:0>width$} {symbol}", frac = frac.to_string(), width = shown as usize)
}

/// Format a token price for display: `Free` for zero, otherwise four
/// decimals followed by the currency symbol.
pub fn format_price(wei: U256, symbol: &str) -> String {
    if wei.is_zero() {
        return "Free".to_string();
    }
    format_amount(wei, 4, symbol)
}
