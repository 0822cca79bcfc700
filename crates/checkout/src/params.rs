use alloy::primitives::{Address, Bytes, U256, U64};
use mintcart_calldata::EncodedCall;
use mintcart_constants::NetworkTarget;
use serde::Serialize;

/// Parameters of an `eth_sendTransaction` request.
///
/// Quantities serialize as minimal `0x` hex (`"0x0"` for zero) and data as
/// lower-case hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionParams {
    from: Address,
    to: Address,
    value: U256,
    data: Bytes,
    gas: U64,
}

impl TransactionParams {
    /// Create new transaction parameters.
    pub fn new(from: Address, to: Address, value: U256, data: Bytes, gas: u64) -> Self {
        Self { from, to, value, data, gas: U64::from(gas) }
    }

    /// Build the parameters that send `call` from `from`.
    pub fn from_call(from: Address, call: EncodedCall) -> Self {
        let (to, value, data, gas) = call.into_parts();
        Self::new(from, to, value, data, gas)
    }

    /// Get the sender.
    pub const fn from(&self) -> Address {
        self.from
    }

    /// Get the target.
    pub const fn to(&self) -> Address {
        self.to
    }

    /// Get the value attached to the transaction.
    pub const fn value(&self) -> U256 {
        self.value
    }

    /// Get the calldata.
    pub const fn data(&self) -> &Bytes {
        &self.data
    }

    /// Get the gas limit.
    pub fn gas(&self) -> u64 {
        self.gas.to()
    }
}

/// Parameters of a `wallet_switchEthereumChain` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchChainParams {
    /// Hex chain ID.
    pub chain_id: String,
}

impl SwitchChainParams {
    /// Create the parameters for `chain_id`.
    pub fn new(chain_id: u64) -> Self {
        Self { chain_id: format!("{chain_id:#x}") }
    }
}

/// Native currency, as `wallet_addEthereumChain` expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
struct NativeCurrencyParams {
    name: &'static str,
    symbol: &'static str,
    decimals: u8,
}

/// Parameters of a `wallet_addEthereumChain` request (EIP-3085).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddChainParams {
    chain_id: String,
    chain_name: String,
    native_currency: NativeCurrencyParams,
    rpc_urls: &'static [&'static str],
    block_explorer_urls: &'static [&'static str],
}

impl From<&NetworkTarget> for AddChainParams {
    fn from(network: &NetworkTarget) -> Self {
        let currency = network.native_currency();
        Self {
            chain_id: network.chain_id_hex(),
            chain_name: network.name().to_string(),
            native_currency: NativeCurrencyParams {
                name: currency.name(),
                symbol: currency.symbol(),
                decimals: currency.decimals(),
            },
            rpc_urls: network.rpc_urls(),
            block_explorer_urls: network.block_explorer_urls(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, bytes};
    use serde_json::json;

    #[test]
    fn transaction_params_wire_format() {
        let params = TransactionParams::new(
            address!("0x00000000000000000000000000000000000000aa"),
            address!("0x00000000000000000000000000000000000000bb"),
            U256::from(0x1bc4fae5f38e8000u64),
            bytes!("FA2B068F"),
            400_000,
        );

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["value"], json!("0x1bc4fae5f38e8000"));
        assert_eq!(value["gas"], json!("0x61a80"));
        assert_eq!(value["data"], json!("0xfa2b068f"));
        assert_eq!(value.as_object().unwrap().len(), 5);
    }

    #[test]
    fn zero_value_is_0x0() {
        let params =
            TransactionParams::new(Address::ZERO, Address::ZERO, U256::ZERO, Bytes::new(), 0);
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["value"], json!("0x0"));
    }

    #[test]
    fn add_chain_params() {
        let params = AddChainParams::from(&NetworkTarget::sepolia());
        let value = serde_json::to_value(&params).unwrap();

        assert_eq!(value["chainId"], json!("0xaa36a7"));
        assert_eq!(value["chainName"], json!("Sepolia Testnet"));
        assert_eq!(value["nativeCurrency"]["decimals"], json!(18));
        assert!(value["rpcUrls"].as_array().is_some());
    }

    #[test]
    fn switch_chain_params() {
        let value = serde_json::to_value(SwitchChainParams::new(137)).unwrap();
        assert_eq!(value, json!({ "chainId": "0x89" }));
    }
}
