//! JWT token provider for creating and validating tokens.

use super::Claims;
use chrono::{DateTime, Duration, Utc};
use gifvault_config::SecurityConfig;
use gifvault_core::{GifVaultError, GifVaultResult, UserId};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::sync::Arc;
use tracing::{debug, warn};

/// An issued access token with its expiry.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Signed access token.
    pub access_token: String,
    /// Token type (always "Bearer").
    pub token_type: String,
    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

/// JWT token provider service.
#[derive(Clone)]
pub struct TokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: Arc<SecurityConfig>,
    validation: Validation,
}

impl TokenProvider {
    /// Creates a new token provider.
    #[must_use]
    pub fn new(config: Arc<SecurityConfig>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.jwt_issuer]);
        validation.set_audience(&[&config.jwt_audience]);
        validation.validate_exp = true;

        Self {
            encoding_key,
            decoding_key,
            config,
            validation,
        }
    }

    /// Generates an access token for a user.
    pub fn generate_access_token(&self, user_id: UserId, email: &str) -> GifVaultResult<IssuedToken> {
        let expires_at =
            Utc::now() + Duration::seconds(self.config.jwt_access_expiration_secs as i64);

        let claims = Claims::new(
            user_id,
            email.to_string(),
            self.config.jwt_issuer.clone(),
            self.config.jwt_audience.clone(),
            expires_at,
        );

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| GifVaultError::Internal(format!("Failed to generate access token: {}", e)))?;

        debug!("Generated access token for user {}", user_id);
        Ok(IssuedToken {
            access_token: token,
            token_type: "Bearer".to_string(),
            expires_at,
        })
    }

    /// Validates a token and returns the claims.
    pub fn validate_access_token(&self, token: &str) -> GifVaultResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                warn!("Token validation failed: {}", e);
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => GifVaultError::TokenExpired,
                    jsonwebtoken::errors::ErrorKind::InvalidToken
                    | jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        GifVaultError::InvalidToken("Invalid token signature".to_string())
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidIssuer => {
                        GifVaultError::InvalidToken("Invalid token issuer".to_string())
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidAudience => {
                        GifVaultError::InvalidToken("Invalid token audience".to_string())
                    }
                    _ => GifVaultError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> TokenProvider {
        TokenProvider::new(Arc::new(SecurityConfig::default()))
    }

    #[test]
    fn test_generate_and_validate_token() {
        let provider = provider();
        let issued = provider
            .generate_access_token(UserId::new(5), "user@example.com")
            .unwrap();

        assert_eq!(issued.token_type, "Bearer");

        let claims = provider.validate_access_token(&issued.access_token).unwrap();
        assert_eq!(claims.user_id(), Some(UserId::new(5)));
        assert_eq!(claims.email, "user@example.com");
    }

    #[test]
    fn test_validate_garbage_token() {
        let provider = provider();
        let result = provider.validate_access_token("not.a.token");
        assert!(matches!(result, Err(GifVaultError::InvalidToken(_))));
    }

    #[test]
    fn test_validate_token_from_other_secret() {
        let provider = provider();

        let other_config = SecurityConfig {
            jwt_secret: "a-different-secret".to_string(),
            ..SecurityConfig::default()
        };
        let other = TokenProvider::new(Arc::new(other_config));
        let issued = other
            .generate_access_token(UserId::new(5), "user@example.com")
            .unwrap();

        assert!(provider.validate_access_token(&issued.access_token).is_err());
    }
}
