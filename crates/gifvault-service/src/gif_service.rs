//! GIF service trait definition.

use crate::dto::{GifListResponse, SaveFavoriteGifRequest, SearchGifsQuery};
use async_trait::async_trait;
use gifvault_core::{Gif, GifId, GifVaultResult, UserId};

/// Facade over the cached catalog client and the favorite store.
#[async_trait]
pub trait GifService: Send + Sync {
    /// Searches the catalog.
    async fn search_gifs(&self, query: SearchGifsQuery) -> GifVaultResult<GifListResponse>;

    /// Fetches a single GIF by ID.
    async fn get_gif_by_id(&self, id: &GifId) -> GifVaultResult<Gif>;

    /// Saves a favorite on behalf of `acting_user_id`.
    ///
    /// The acting user may only save favorites for themselves; a mismatch
    /// is a capability failure, not a validation failure.
    async fn save_favorite_gif(
        &self,
        request: SaveFavoriteGifRequest,
        acting_user_id: UserId,
    ) -> GifVaultResult<()>;
}
