//! JWT claims structure.

use chrono::{DateTime, Utc};
use gifvault_core::UserId;
use serde::{Deserialize, Serialize};

/// JWT claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID).
    pub sub: String,

    /// User's email.
    pub email: String,

    /// Issued at timestamp.
    pub iat: i64,

    /// Expiration timestamp.
    pub exp: i64,

    /// Issuer.
    pub iss: String,

    /// Audience.
    pub aud: String,
}

impl Claims {
    /// Creates new access token claims.
    #[must_use]
    pub fn new(
        user_id: UserId,
        email: String,
        issuer: String,
        audience: String,
        expires_at: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.to_string(),
            email,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            iss: issuer,
            aud: audience,
        }
    }

    /// Returns the user ID from the subject claim.
    pub fn user_id(&self) -> Option<UserId> {
        UserId::parse(&self.sub).ok()
    }
}
