//! Repository trait definitions.

use async_trait::async_trait;
use gifvault_core::{FavoriteGif, GifVaultResult, ServiceLog, User, UserId};

/// Favorite GIF repository trait.
#[async_trait]
pub trait FavoriteGifRepository: Send + Sync {
    /// Saves a new favorite.
    ///
    /// A uniqueness violation on `(user_id, gif_id)` surfaces as
    /// [`gifvault_core::GifVaultError::DuplicateFavorite`]; any other
    /// persistence failure surfaces as a generic database error.
    async fn save(&self, favorite: &FavoriteGif) -> GifVaultResult<()>;
}

/// Service log repository trait.
#[async_trait]
pub trait ServiceLogRepository: Send + Sync {
    /// Appends one audit record. Records are never updated or deleted.
    async fn save(&self, log: &ServiceLog) -> GifVaultResult<()>;
}

/// User repository trait.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> GifVaultResult<Option<User>>;

    /// Finds a user by email.
    async fn find_by_email(&self, email: &str) -> GifVaultResult<Option<User>>;

    /// Checks whether a user with this ID exists.
    async fn exists_by_id(&self, id: UserId) -> GifVaultResult<bool>;
}
