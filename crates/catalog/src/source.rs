use crate::{CatalogError, ClaimApi, InstanceData};
use core::future::Future;

/// A source of claim instance data.
///
/// [`ClaimApi`] is the production implementation; tests substitute canned
/// data.
pub trait ClaimSource {
    /// The error type returned by fetch operations.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Fetch the public data of a claim instance.
    fn fetch_claim(
        &self,
        instance_id: u64,
    ) -> impl Future<Output = Result<InstanceData, Self::Error>> + Send;
}

impl ClaimSource for ClaimApi {
    type Error = CatalogError;

    async fn fetch_claim(&self, instance_id: u64) -> Result<InstanceData, Self::Error> {
        self.get_instance(instance_id).await
    }
}
