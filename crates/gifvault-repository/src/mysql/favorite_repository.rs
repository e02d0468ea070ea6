//! MySQL favorite GIF repository implementation.

use crate::{pool::DatabasePool, traits::FavoriteGifRepository};
use async_trait::async_trait;
use gifvault_core::{FavoriteGif, GifVaultError, GifVaultResult};
use std::sync::Arc;
use tracing::debug;

/// MySQL favorite GIF repository.
pub struct MySqlFavoriteGifRepository {
    pool: Arc<DatabasePool>,
}

impl MySqlFavoriteGifRepository {
    /// Creates a new MySQL favorite GIF repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// SQLSTATE/vendor codes MySQL reports for a unique-key violation.
fn is_unique_violation(code: Option<&str>) -> bool {
    matches!(code, Some("23000") | Some("1062"))
}

#[async_trait]
impl FavoriteGifRepository for MySqlFavoriteGifRepository {
    async fn save(&self, favorite: &FavoriteGif) -> GifVaultResult<()> {
        debug!(
            "Saving favorite gif '{}' for user {}",
            favorite.gif_id, favorite.user_id
        );

        let result = sqlx::query(
            r#"
            INSERT INTO favorite_gifs (user_id, gif_id, alias, created_at, updated_at)
            VALUES (?, ?, ?, NOW(), NOW())
            "#,
        )
        .bind(favorite.user_id.into_inner())
        .bind(favorite.gif_id.as_str())
        .bind(&favorite.alias)
        .execute(self.pool.inner())
        .await;

        match result {
            Ok(_) => Ok(()),
            // The (user_id, gif_id) unique index is the only reliable
            // duplicate detector: two concurrent saves for the same pair
            // can both pass any application-level pre-check.
            Err(sqlx::Error::Database(db_err)) if is_unique_violation(db_err.code().as_deref()) => {
                Err(GifVaultError::DuplicateFavorite)
            }
            Err(e) => Err(e.into()),
        }
    }
}
