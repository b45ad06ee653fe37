use crate::error::BackendError;
use crate::models::{MaintenanceOutcome, SearchQuery, SearchResult};
use async_trait::async_trait;

/// Seam to the remote similarity service. The session only ever talks
/// through this trait, so tests substitute fakes and the real client stays
/// at the edge.
#[async_trait]
pub trait SimilarityBackend {
    /// Ranked matches for a candidate proposal, in the service's own order.
    async fn find_similar(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, BackendError>;

    /// Reloads the service's source dataset.
    async fn load_data(&self) -> Result<MaintenanceOutcome, BackendError>;

    /// Recomputes embeddings for everything the service has loaded.
    async fn generate_embeddings(&self) -> Result<MaintenanceOutcome, BackendError>;
}
