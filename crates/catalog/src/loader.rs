use crate::ClaimSource;
use futures_util::{stream, StreamExt};
use mintcart_types::{Catalog, ClaimConfig, ClaimIds, Offering, UnavailableOffering};
use tracing::{debug, info, instrument, warn};

/// Builds a [`Catalog`] from a claim list by fetching each claim's data.
///
/// Claims are fetched one at a time, in list order. A claim that cannot be
/// fetched or converted becomes an [`Offering::Unavailable`]; loading never
/// fails as a whole.
#[derive(Debug, Clone)]
pub struct CatalogLoader<S> {
    source: S,
}

impl<S> CatalogLoader<S> {
    /// Create a new loader.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// Get a reference to the claim source.
    pub const fn source(&self) -> &S {
        &self.source
    }
}

impl<S> CatalogLoader<S>
where
    S: ClaimSource + Sync,
{
    /// Load every enabled claim of `claims`.
    #[instrument(skip_all, fields(claims = claims.collections().len()))]
    pub async fn load(&self, claims: &ClaimIds) -> Catalog {
        let offerings: Vec<Offering> =
            stream::iter(claims.enabled()).then(|config| self.load_one(config)).collect().await;
        let catalog = Catalog::new(offerings);

        let available = catalog.available().count();
        info!(available, unavailable = catalog.len() - available, "loaded catalog");
        catalog
    }

    /// Load a single claim.
    #[instrument(skip_all, fields(id = config.id(), claim_id = config.claim_id()))]
    pub async fn load_one(&self, config: &ClaimConfig) -> Offering {
        let reason = match self.source.fetch_claim(config.claim_id()).await {
            Ok(data) => match data.into_offering(config) {
                Ok(offering) => {
                    debug!(title = offering.title(), "loaded claim");
                    return offering.into();
                }
                Err(err) => err.to_string(),
            },
            Err(err) => err.to_string(),
        };

        warn!(%reason, "failed to load claim");
        let title = config
            .custom_title()
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| format!("Collection {}", config.claim_id()));
        UnavailableOffering::new(config.id(), config.claim_id(), title, reason).into()
    }
}
