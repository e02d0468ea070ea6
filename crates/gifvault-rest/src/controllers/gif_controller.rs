//! GIF catalog and favorites controller.

use crate::{
    extractors::{AuthenticatedUser, ValidatedJson, ValidatedQuery},
    responses::{created, ok, ApiResponse, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use gifvault_core::{Gif, GifId, GifVaultError};
use gifvault_service::{GifListResponse, SaveFavoriteGifRequest, SearchGifsQuery};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Body of a successful favorite save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedResponse {
    pub message: String,
}

/// Creates the GIF router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index).post(store))
        .route("/:id", get(show))
}

/// Search the GIF catalog.
async fn index(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    ValidatedQuery(query): ValidatedQuery<SearchGifsQuery>,
) -> ApiResult<GifListResponse> {
    debug!("Search gifs request: q='{}'", query.q);

    let response = state.gif_service.search_gifs(query).await?;
    ok(response)
}

/// Fetch a single GIF by ID.
async fn show(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<String>,
) -> ApiResult<Gif> {
    debug!("Get gif request: {}", id);

    let gif = state.gif_service.get_gif_by_id(&GifId::new(id)).await?;
    ok(gif)
}

/// Save a favorite GIF for the authenticated user.
async fn store(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(request): ValidatedJson<SaveFavoriteGifRequest>,
) -> Result<(StatusCode, Json<ApiResponse<SavedResponse>>), AppError> {
    debug!("Save favorite gif request: {}", request.gif_id);

    let acting_user_id = user.user_id().ok_or_else(|| {
        AppError(GifVaultError::internal("Missing user ID in token"))
    })?;

    state
        .gif_service
        .save_favorite_gif(request, acting_user_id)
        .await?;

    Ok(created(SavedResponse {
        message: "GIF saved successfully.".to_string(),
    }))
}
