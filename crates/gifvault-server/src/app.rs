//! Composition root: explicit constructor wiring of every component.

use axum::Router;
use gifvault_client::{CachedGifClient, GifProvider, GiphyClient, MemoryCache};
use gifvault_config::AppConfig;
use gifvault_core::GifVaultResult;
use gifvault_repository::{
    create_pool, FavoriteGifRepository, MySqlFavoriteGifRepository, MySqlServiceLogRepository,
    MySqlUserRepository, ServiceLogRepository, UserRepository,
};
use gifvault_rest::{create_router, AppState};
use gifvault_security::{PasswordHasher, TokenProvider};
use gifvault_service::{AuthService, AuthServiceImpl, GifService, GifServiceImpl};
use std::sync::Arc;

/// Builds the application router with all dependencies wired.
pub async fn build(config: &AppConfig) -> GifVaultResult<Router> {
    // Persistence
    let db_pool = create_pool(&config.database).await?;
    db_pool.run_migrations().await?;

    let favorite_repository: Arc<dyn FavoriteGifRepository> =
        Arc::new(MySqlFavoriteGifRepository::new(db_pool.clone()));
    let service_log_repository: Arc<dyn ServiceLogRepository> =
        Arc::new(MySqlServiceLogRepository::new(db_pool.clone()));
    let user_repository: Arc<dyn UserRepository> = Arc::new(MySqlUserRepository::new(db_pool));

    // Security
    let password_hasher = Arc::new(PasswordHasher::new());
    let token_provider = Arc::new(TokenProvider::new(Arc::new(config.security.clone())));

    // Upstream catalog: raw client behind the read-through cache
    let giphy_client: Arc<dyn GifProvider> = Arc::new(GiphyClient::new(&config.giphy)?);
    let cached_client: Arc<dyn GifProvider> = Arc::new(CachedGifClient::new(
        giphy_client,
        Arc::new(MemoryCache::new()),
    ));

    // Services
    let gif_service: Arc<dyn GifService> = Arc::new(GifServiceImpl::new(
        cached_client,
        favorite_repository,
        user_repository.clone(),
    ));
    let auth_service: Arc<dyn AuthService> = Arc::new(AuthServiceImpl::new(
        user_repository,
        password_hasher,
        token_provider.clone(),
    ));

    let state = AppState::new(gif_service, auth_service);

    Ok(create_router(
        state,
        token_provider,
        service_log_repository,
        &config.server,
    ))
}
