//! GIF service implementation.

use crate::dto::{GifListResponse, SaveFavoriteGifRequest, SearchGifsQuery};
use crate::gif_service::GifService;
use async_trait::async_trait;
use gifvault_client::GifProvider;
use gifvault_core::{Gif, GifId, GifVaultError, GifVaultResult, UserId, ValidateExt};
use gifvault_repository::{FavoriteGifRepository, UserRepository};
use std::sync::Arc;
use tracing::{debug, info};

/// GIF service implementation.
pub struct GifServiceImpl {
    gif_provider: Arc<dyn GifProvider>,
    favorite_repository: Arc<dyn FavoriteGifRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl GifServiceImpl {
    /// Creates a new GIF service.
    pub fn new(
        gif_provider: Arc<dyn GifProvider>,
        favorite_repository: Arc<dyn FavoriteGifRepository>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            gif_provider,
            favorite_repository,
            user_repository,
        }
    }
}

#[async_trait]
impl GifService for GifServiceImpl {
    async fn search_gifs(&self, query: SearchGifsQuery) -> GifVaultResult<GifListResponse> {
        debug!("Searching gifs: q='{}'", query.q);

        query.validate_request()?;

        let page = self.gif_provider.search(&query.into_filter()).await?;
        Ok(GifListResponse::from(page))
    }

    async fn get_gif_by_id(&self, id: &GifId) -> GifVaultResult<Gif> {
        debug!("Getting gif: {}", id);

        self.gif_provider.get_by_id(id).await
    }

    async fn save_favorite_gif(
        &self,
        request: SaveFavoriteGifRequest,
        acting_user_id: UserId,
    ) -> GifVaultResult<()> {
        debug!(
            "Saving favorite gif '{}' for user {} (acting user {})",
            request.gif_id, request.user_id, acting_user_id
        );

        request.validate_request()?;

        // Capability check: users save favorites for themselves only.
        if acting_user_id != UserId::new(request.user_id) {
            return Err(GifVaultError::forbidden(
                "Cannot save a favorite for another user",
            ));
        }

        if !self.user_repository.exists_by_id(acting_user_id).await? {
            return Err(GifVaultError::validation(format!(
                "user_id: user {} does not exist",
                request.user_id
            )));
        }

        let favorite = request.into_favorite();
        self.favorite_repository.save(&favorite).await?;

        info!(
            "Favorite gif '{}' saved for user {}",
            favorite.gif_id, favorite.user_id
        );
        Ok(())
    }
}

impl std::fmt::Debug for GifServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GifServiceImpl").finish_non_exhaustive()
    }
}
