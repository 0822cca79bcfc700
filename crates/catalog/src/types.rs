use crate::{CatalogError, Result};
use alloy::primitives::{Address, U256};
use chrono::{DateTime, Utc};
use mintcart_calldata::parse_address;
use mintcart_types::{ClaimConfig, ClaimOffering};
use serde::{Deserialize, Deserializer};

/// Contract standard that selects the ERC-1155 claim extension.
const ERC1155: &str = "ERC1155";

/// Response of the claim instance endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceData {
    /// Claim instance id.
    #[serde(default)]
    pub id: Option<u64>,
    /// Public claim data.
    #[serde(default)]
    pub public_data: PublicData,
}

/// Public part of a claim instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicData {
    /// Token metadata.
    #[serde(default)]
    pub asset: Asset,
    /// Creator contract.
    #[serde(default)]
    pub contract: ContractInfo,
    /// Price per token.
    #[serde(default)]
    pub mint_price: MintPrice,
    /// ERC-721 claim extension.
    #[serde(default)]
    pub extension_address721: Option<AddressValue>,
    /// ERC-1155 claim extension.
    #[serde(default)]
    pub extension_address1155: Option<AddressValue>,
    /// Per-wallet mint limit. Zero or absent means the default applies.
    #[serde(default)]
    pub wallet_max: Option<u32>,
    /// Total token supply.
    #[serde(default)]
    pub token_supply: Option<u64>,
    /// Opening time, in milliseconds since the epoch.
    #[serde(default)]
    pub start_date: Option<i64>,
    /// Claim description, used when the asset has none.
    #[serde(default)]
    pub description: Option<String>,
}

/// Token metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Asset {
    /// Token name.
    #[serde(default)]
    pub name: Option<String>,
    /// Token description.
    #[serde(default)]
    pub description: Option<String>,
    /// Preferred image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Fallback image URL.
    #[serde(default)]
    pub image: Option<String>,
}

/// Creator contract info.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractInfo {
    /// Creator contract address.
    #[serde(default)]
    pub contract_address: Option<String>,
    /// Token standard, `ERC721` or `ERC1155`.
    #[serde(default)]
    pub spec: Option<String>,
}

/// Price per token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MintPrice {
    /// Price in base units. Accepts a JSON number or a decimal or hex
    /// string.
    #[serde(default, deserialize_with = "deser_amount")]
    pub value: Option<U256>,
    /// Currency symbol.
    #[serde(default)]
    pub symbol: Option<String>,
}

/// A wrapped address value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AddressValue {
    /// The address, as sent by the API.
    #[serde(default)]
    pub value: Option<String>,
}

fn deser_amount<'de, D>(deserializer: D) -> std::result::Result<Option<U256>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(u64),
        String(String),
    }

    match Option::<Amount>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Amount::Number(value)) => Ok(Some(U256::from(value))),
        Some(Amount::String(value)) if value.trim().is_empty() => Ok(None),
        Some(Amount::String(value)) => {
            value.trim().parse().map(Some).map_err(serde::de::Error::custom)
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

fn address_field(value: Option<&str>, field: &'static str) -> Result<Address> {
    let value = non_empty(value).ok_or(CatalogError::MissingField(field))?;
    parse_address(value)
        .map_err(|err| CatalogError::InvalidField { field, reason: err.to_string() })
}

impl PublicData {
    /// True if the creator contract is an ERC-1155 contract.
    pub fn is_erc1155(&self) -> bool {
        self.contract.spec.as_deref() == Some(ERC1155)
    }

    /// The claim extension that mints for this contract standard.
    pub fn extension_address(&self) -> Result<Address> {
        if self.is_erc1155() {
            let value = self.extension_address1155.as_ref().and_then(|v| v.value.as_deref());
            address_field(value, "extensionAddress1155")
        } else {
            let value = self.extension_address721.as_ref().and_then(|v| v.value.as_deref());
            address_field(value, "extensionAddress721")
        }
    }

    /// The creator contract address.
    pub fn contract_address(&self) -> Result<Address> {
        address_field(self.contract.contract_address.as_deref(), "contract.contractAddress")
    }

    /// The opening time, if scheduled.
    pub fn start_date(&self) -> Result<Option<DateTime<Utc>>> {
        self.start_date
            .map(|ms| {
                DateTime::from_timestamp_millis(ms).ok_or_else(|| CatalogError::InvalidField {
                    field: "startDate",
                    reason: format!("{ms} is out of range"),
                })
            })
            .transpose()
    }
}

impl InstanceData {
    /// Build an offering from this claim data and its claim list entry.
    ///
    /// Customizations in `config` take precedence over the claim data. The
    /// creator contract and the extension matching the contract standard
    /// are required; everything else has a default.
    pub fn into_offering(self, config: &ClaimConfig) -> Result<ClaimOffering> {
        let instance_id = self.id.unwrap_or(config.claim_id());
        let data = self.public_data;

        let contract_address = data.contract_address()?;
        let extension_address = data.extension_address()?;
        let start_date = data.start_date()?;

        let wallet_max = data
            .wallet_max
            .filter(|max| *max > 0)
            .unwrap_or(ClaimOffering::default_wallet_max());

        let mut offering = ClaimOffering::new(
            config.id(),
            instance_id,
            contract_address,
            extension_address,
            data.mint_price.value.unwrap_or_default(),
            wallet_max,
        );

        if let Some(symbol) = non_empty(data.mint_price.symbol.as_deref()) {
            offering = offering.with_currency(symbol);
        }

        let title = config.custom_title().or(non_empty(data.asset.name.as_deref()));
        if let Some(title) = title {
            offering = offering.with_title(title);
        }

        let description = config
            .custom_description()
            .or(non_empty(data.asset.description.as_deref()))
            .or(non_empty(data.description.as_deref()));
        if let Some(description) = description {
            offering = offering.with_description(description);
        }

        let image = non_empty(data.asset.image_url.as_deref())
            .or(non_empty(data.asset.image.as_deref()))
            .or(config.custom_image());
        if let Some(image) = image {
            offering = offering.with_image_url(image);
        }

        if let Some(supply) = data.token_supply {
            offering = offering.with_total_supply(supply);
        }
        if let Some(start_date) = start_date {
            offering = offering.with_start_date(start_date);
        }

        Ok(offering)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ERC721_CLAIM: &str = r#"{
        "id": 4184983792,
        "publicData": {
            "asset": {
                "name": "Genesis Pass",
                "description": "The first drop",
                "image": "https://img.example/genesis.png"
            },
            "contract": {
                "contractAddress": "0xAbCdEf0123456789aBcDeF0123456789AbCdEf01",
                "spec": "ERC721"
            },
            "mintPrice": { "value": "5000000000000000", "symbol": "ETH" },
            "extensionAddress721": { "value": "0x1111111111111111111111111111111111111111" },
            "extensionAddress1155": { "value": "0x2222222222222222222222222222222222222222" },
            "walletMax": 3,
            "tokenSupply": 500,
            "startDate": 1704067200000
        }
    }"#;

    fn config() -> ClaimConfig {
        ClaimConfig::new("genesis", 4184983792)
    }

    #[test]
    fn converts_erc721_claim() {
        let data: InstanceData = serde_json::from_str(ERC721_CLAIM).unwrap();
        let offering = data.into_offering(&config()).unwrap();

        assert_eq!(offering.id(), "genesis");
        assert_eq!(offering.instance_id(), 4184983792);
        assert_eq!(offering.title(), "Genesis Pass");
        assert_eq!(offering.description(), "The first drop");
        assert_eq!(offering.image_url(), Some("https://img.example/genesis.png"));
        assert_eq!(
            offering.contract_address(),
            "0xabcdef0123456789abcdef0123456789abcdef01".parse::<Address>().unwrap()
        );
        assert_eq!(offering.extension_address(), Address::repeat_byte(0x11));
        assert_eq!(offering.price(), U256::from(5_000_000_000_000_000u64));
        assert_eq!(offering.formatted_price(), "0.0050 ETH");
        assert_eq!(offering.wallet_max(), 3);
        assert_eq!(offering.total_supply(), Some(500));
        assert_eq!(offering.start_date().unwrap().timestamp(), 1_704_067_200);
    }

    #[test]
    fn erc1155_uses_1155_extension() {
        let json = ERC721_CLAIM.replace(r#""spec": "ERC721""#, r#""spec": "ERC1155""#);
        let data: InstanceData = serde_json::from_str(&json).unwrap();
        let offering = data.into_offering(&config()).unwrap();
        assert_eq!(offering.extension_address(), Address::repeat_byte(0x22));
    }

    #[test]
    fn customizations_take_precedence() {
        let data: InstanceData = serde_json::from_str(ERC721_CLAIM).unwrap();
        let config = config()
            .with_custom_title("My Pass")
            .with_custom_description("Mine")
            .with_custom_image("https://img.example/custom.png");
        let offering = data.into_offering(&config).unwrap();

        assert_eq!(offering.title(), "My Pass");
        assert_eq!(offering.description(), "Mine");
        // The claim's own image wins over the custom one.
        assert_eq!(offering.image_url(), Some("https://img.example/genesis.png"));
    }

    #[test]
    fn sparse_claim_gets_defaults() {
        let json = r#"{
            "publicData": {
                "contract": { "contractAddress": "0x3333333333333333333333333333333333333333" },
                "extensionAddress721": { "value": "0x4444444444444444444444444444444444444444" },
                "walletMax": 0,
                "description": "from public data"
            }
        }"#;
        let data: InstanceData = serde_json::from_str(json).unwrap();
        let offering = data.into_offering(&config()).unwrap();

        assert_eq!(offering.title(), "Claim 4184983792");
        assert_eq!(offering.description(), "from public data");
        assert_eq!(offering.price(), U256::ZERO);
        assert_eq!(offering.formatted_price(), "Free");
        assert_eq!(offering.currency(), "ETH");
        assert_eq!(offering.wallet_max(), 10);
        assert!(offering.start_date().is_none());
    }

    #[test]
    fn claim_without_any_description_uses_default() {
        let json = r#"{
            "publicData": {
                "contract": { "contractAddress": "0x3333333333333333333333333333333333333333" },
                "extensionAddress721": { "value": "0x4444444444444444444444444444444444444444" },
                "asset": { "description": "" }
            }
        }"#;
        let data: InstanceData = serde_json::from_str(json).unwrap();
        let offering = data.into_offering(&config()).unwrap();
        assert_eq!(offering.description(), mintcart_types::DEFAULT_DESCRIPTION);
    }

    #[test]
    fn numeric_price() {
        let json = r#"{ "value": 1000000000000000000, "symbol": "MATIC" }"#;
        let price: MintPrice = serde_json::from_str(json).unwrap();
        assert_eq!(price.value, Some(U256::from(1_000_000_000_000_000_000u64)));
    }

    #[test]
    fn missing_addresses_are_errors() {
        let data = InstanceData::default();
        assert!(matches!(
            data.into_offering(&config()),
            Err(CatalogError::MissingField("contract.contractAddress"))
        ));

        let json = r#"{
            "publicData": {
                "contract": {
                    "contractAddress": "0x3333333333333333333333333333333333333333",
                    "spec": "ERC1155"
                },
                "extensionAddress721": { "value": "0x4444444444444444444444444444444444444444" }
            }
        }"#;
        let data: InstanceData = serde_json::from_str(json).unwrap();
        assert!(matches!(
            data.into_offering(&config()),
            Err(CatalogError::MissingField("extensionAddress1155"))
        ));
    }

    #[test]
    fn malformed_address_is_invalid() {
        let json = ERC721_CLAIM.replace("0x1111111111111111111111111111111111111111", "0x1234");
        let data: InstanceData = serde_json::from_str(&json).unwrap();
        assert!(matches!(
            data.into_offering(&config()),
            Err(CatalogError::InvalidField { field: "extensionAddress721", .. })
        ));
    }
}
