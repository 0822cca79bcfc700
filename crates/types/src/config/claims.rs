use crate::ConfigError;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

/// Default label of the mint button.
const DEFAULT_MINT_BUTTON_TEXT: &str = "Mint Now";

/// Card theme of a collection.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light card.
    #[default]
    Light,
    /// Dark card.
    Dark,
}

/// One entry of the claim list: which claim to sell, and how to present it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimConfig {
    /// Storefront identifier.
    id: String,
    /// Claim instance id. Accepts a JSON string or number.
    #[serde(deserialize_with = "deser_claim_id")]
    claim_id: u64,
    /// Disabled entries are skipped when the catalog is loaded.
    #[serde(default = "enabled_default")]
    enabled: bool,
    #[serde(default)]
    custom_title: String,
    #[serde(default)]
    custom_description: String,
    #[serde(default)]
    custom_image: String,
    #[serde(default)]
    mint_button_text: String,
    #[serde(default)]
    theme: Theme,
}

const fn enabled_default() -> bool {
    true
}

fn deser_claim_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(u64),
    }

    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Number(id) => Ok(id),
        StringOrNumber::String(id) => id.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}

impl ClaimConfig {
    /// Create an enabled entry with no customizations.
    pub fn new(id: impl Into<String>, claim_id: u64) -> Self {
        Self {
            id: id.into(),
            claim_id,
            enabled: true,
            custom_title: String::new(),
            custom_description: String::new(),
            custom_image: String::new(),
            mint_button_text: String::new(),
            theme: Theme::Light,
        }
    }

    /// Set the custom title.
    pub fn with_custom_title(mut self, title: impl Into<String>) -> Self {
        self.custom_title = title.into();
        self
    }

    /// Set the custom description.
    pub fn with_custom_description(mut self, description: impl Into<String>) -> Self {
        self.custom_description = description.into();
        self
    }

    /// Set the custom image.
    pub fn with_custom_image(mut self, image: impl Into<String>) -> Self {
        self.custom_image = image.into();
        self
    }

    /// Enable or disable the entry.
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Get the storefront id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the claim instance id.
    pub const fn claim_id(&self) -> u64 {
        self.claim_id
    }

    /// True if the entry is enabled.
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    /// Get the custom title, if set.
    pub fn custom_title(&self) -> Option<&str> {
        non_empty(&self.custom_title)
    }

    /// Get the custom description, if set.
    pub fn custom_description(&self) -> Option<&str> {
        non_empty(&self.custom_description)
    }

    /// Get the custom image, if set.
    pub fn custom_image(&self) -> Option<&str> {
        non_empty(&self.custom_image)
    }

    /// Get the mint button label.
    pub fn mint_button_text(&self) -> &str {
        non_empty(&self.mint_button_text).unwrap_or(DEFAULT_MINT_BUTTON_TEXT)
    }

    /// Get the card theme.
    pub const fn theme(&self) -> Theme {
        self.theme
    }
}

/// Metadata block of the claim list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimIdsMetadata {
    /// Document version.
    #[serde(default)]
    pub version: String,
    /// Last update timestamp, as written by the operator.
    #[serde(default)]
    pub last_updated: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

/// The claim list: every collection the storefront sells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimIds {
    collections: Vec<ClaimConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<ClaimIdsMetadata>,
}

impl ClaimIds {
    /// Create a claim list.
    pub const fn new(collections: Vec<ClaimConfig>) -> Self {
        Self { collections, metadata: None }
    }

    /// Parse a claim list from JSON. A document without a `collections`
    /// array is rejected.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(Into::into)
    }

    /// Read and parse a claim list from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Get every entry, enabled or not.
    pub fn collections(&self) -> &[ClaimConfig] {
        &self.collections
    }

    /// Iterate over the enabled entries.
    pub fn enabled(&self) -> impl Iterator<Item = &ClaimConfig> + '_ {
        self.collections.iter().filter(|claim| claim.enabled)
    }

    /// Get the metadata block.
    pub const fn metadata(&self) -> Option<&ClaimIdsMetadata> {
        self.metadata.as_ref()
    }
}
