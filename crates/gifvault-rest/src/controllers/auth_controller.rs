//! Authentication controller.

use crate::{
    extractors::ValidatedJson,
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{routing::post, Router};
use axum::extract::State;
use gifvault_service::{LoginRequest, LoginResponse};
use tracing::debug;

/// Creates the auth router.
pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Handle the login request.
async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<LoginResponse> {
    debug!("Login request: {}", request.email);

    let response = state.auth_service.login(request).await?;
    ok(response)
}
