//! Authentication service.

use crate::dto::{LoginRequest, LoginResponse};
use async_trait::async_trait;
use gifvault_core::{GifVaultError, GifVaultResult, ValidateExt};
use gifvault_repository::UserRepository;
use gifvault_security::{Claims, PasswordHasher, TokenProvider};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Authentication service trait.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Logs in a user and issues a bearer token.
    async fn login(&self, request: LoginRequest) -> GifVaultResult<LoginResponse>;

    /// Validates an access token and returns its claims.
    fn validate_token(&self, token: &str) -> GifVaultResult<Claims>;
}

/// Authentication service implementation.
pub struct AuthServiceImpl {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<PasswordHasher>,
    token_provider: Arc<TokenProvider>,
}

impl AuthServiceImpl {
    /// Creates a new authentication service.
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_hasher: Arc<PasswordHasher>,
        token_provider: Arc<TokenProvider>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn login(&self, request: LoginRequest) -> GifVaultResult<LoginResponse> {
        debug!("Login attempt: {}", request.email);

        request.validate_request()?;

        let user = self
            .user_repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed, unknown email: {}", request.email);
                GifVaultError::InvalidCredentials
            })?;

        if !self
            .password_hasher
            .verify(&request.password, &user.password_hash)?
        {
            warn!("Login failed, bad password for user {}", user.id);
            return Err(GifVaultError::InvalidCredentials);
        }

        let token = self
            .token_provider
            .generate_access_token(user.id, &user.email)?;

        info!("User {} logged in", user.id);
        Ok(LoginResponse::from(token))
    }

    fn validate_token(&self, token: &str) -> GifVaultResult<Claims> {
        self.token_provider.validate_access_token(token)
    }
}

impl std::fmt::Debug for AuthServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthServiceImpl").finish_non_exhaustive()
    }
}
