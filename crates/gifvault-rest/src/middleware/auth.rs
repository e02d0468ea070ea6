//! Authentication middleware.

use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};
use gifvault_security::TokenProvider;
use std::sync::Arc;
use tracing::debug;

/// Authentication middleware state.
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub token_provider: Arc<TokenProvider>,
}

impl AuthMiddlewareState {
    /// Creates new auth middleware state.
    #[must_use]
    pub fn new(token_provider: Arc<TokenProvider>) -> Self {
        Self { token_provider }
    }
}

/// Authentication middleware that validates JWT bearer tokens.
///
/// Valid claims are added to the request extensions for extractors, and
/// copied onto the response extensions so the audit layer can attribute the
/// request after the handler has run. An invalid or missing token does not
/// reject here; the `AuthenticatedUser` extractor decides whether auth is
/// required.
pub async fn auth_middleware(
    State(state): State<AuthMiddlewareState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let mut claims = None;

    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    if let Some(token) = auth_header.and_then(|h| h.strip_prefix("Bearer ")) {
        match state.token_provider.validate_access_token(token) {
            Ok(validated) => {
                debug!("Authenticated user: {}", validated.sub);
                request.extensions_mut().insert(validated.clone());
                claims = Some(validated);
            }
            Err(e) => {
                debug!("Token validation failed: {}", e);
            }
        }
    }

    let mut response = next.run(request).await;

    if let Some(claims) = claims {
        response.extensions_mut().insert(claims);
    }

    response
}
