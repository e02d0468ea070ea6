//! Provider trait for the upstream GIF catalog.

use async_trait::async_trait;
use gifvault_core::{Gif, GifFilter, GifId, GifPage, GifVaultResult};

/// Access to the upstream GIF catalog.
///
/// Implemented by the raw HTTP client and by the caching decorator, so
/// callers cannot tell whether a result came from the provider or a
/// still-fresh cache entry.
#[async_trait]
pub trait GifProvider: Send + Sync {
    /// Searches the catalog.
    async fn search(&self, filter: &GifFilter) -> GifVaultResult<GifPage>;

    /// Fetches a single GIF by its provider ID.
    async fn get_by_id(&self, id: &GifId) -> GifVaultResult<Gif>;
}
