use crate::{types::InstanceData, Result};
use tracing::{instrument, warn};

/// Public claim instance endpoint. The claim id goes in the `id` query
/// parameter.
pub const MANIFOLD_CLAIM_API_URL: &str = "https://apps.api.manifoldxyz.dev/public/instance/data";

/// Client for the public claim API.
#[derive(Debug, Clone)]
pub struct ClaimApi {
    /// The URL of the instance data endpoint.
    url: reqwest::Url,
    /// The reqwest client used to send requests.
    client: reqwest::Client,
}

impl ClaimApi {
    /// Create a new client with the given URL and reqwest client.
    pub const fn new_with_client(url: reqwest::Url, client: reqwest::Client) -> Self {
        Self { url, client }
    }

    /// Create a new client with the given URL and a new reqwest client.
    pub fn new(url: reqwest::Url) -> Self {
        Self { url, client: reqwest::Client::new() }
    }

    /// Create a new client given a string URL.
    pub fn new_from_string(url: &str) -> Result<Self> {
        let url = reqwest::Url::parse(url)?;
        Ok(Self::new(url))
    }

    /// Connect to the public Manifold claim API.
    pub fn manifold() -> Result<Self> {
        Self::new_from_string(MANIFOLD_CLAIM_API_URL)
    }

    /// Connect to `url`, or to the public Manifold claim API when no
    /// override is given.
    pub fn from_override(url: Option<&str>) -> Result<Self> {
        Self::new_from_string(url.unwrap_or(MANIFOLD_CLAIM_API_URL))
    }

    /// Get the endpoint URL.
    pub const fn url(&self) -> &reqwest::Url {
        &self.url
    }

    /// Get the client used to send requests
    pub const fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Fetch the public data of a claim instance.
    ///
    /// Any non-success status is an error; a 404 maps to
    /// [`CatalogError::NotFound`].
    ///
    /// [`CatalogError::NotFound`]: crate::CatalogError::NotFound
    #[instrument(skip(self))]
    pub async fn get_instance(&self, instance_id: u64) -> Result<InstanceData> {
        let mut url = self.url.clone();
        url.query_pairs_mut().append_pair("id", &instance_id.to_string());

        self.client
            .get(url)
            .send()
            .await
            .inspect_err(|e| warn!(%e, "Failed to reach claim API"))?
            .error_for_status()?
            .json::<InstanceData>()
            .await
            .inspect_err(|e| warn!(%e, "Failed to parse claim API response"))
            .map_err(Into::into)
    }
}
