//! Main application router.

use crate::{
    controllers::{auth_controller, gif_controller, health_controller},
    middleware::{audit_middleware, auth_middleware, AuditState, AuthMiddlewareState},
    state::AppState,
};
use axum::{middleware, routing::get, Router};
use gifvault_config::ServerConfig;
use gifvault_repository::ServiceLogRepository;
use gifvault_security::TokenProvider;
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Creates the main application router.
///
/// The audit layer wraps both the auth boundary and the versioned API, so
/// every inbound call on those routes produces exactly one service log
/// record regardless of outcome. Health probes stay outside it.
pub fn create_router(
    state: AppState,
    token_provider: Arc<TokenProvider>,
    service_logs: Arc<dyn ServiceLogRepository>,
    server_config: &ServerConfig,
) -> Router {
    let cors = create_cors_layer(server_config);

    let auth_state = AuthMiddlewareState::new(token_provider);
    let audit_state = AuditState::new(service_logs);

    let api_router = Router::new()
        .nest(
            "/v1/gifs",
            gif_controller::router().layer(middleware::from_fn_with_state(
                auth_state,
                auth_middleware,
            )),
        )
        .nest("/auth", auth_controller::router())
        .layer(middleware::from_fn_with_state(audit_state, audit_middleware))
        .with_state(state);

    let router = Router::new()
        // Health endpoints (no auth, not audited)
        .merge(health_controller::router())
        // API
        .nest("/api", api_router)
        // Root endpoint
        .route("/", get(root))
        // Add middleware layers
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(server_config.request_timeout()));

    info!("Router created with REST endpoints");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        if server_config.cors_origins.contains(&"*".to_string()) {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    } else {
        CorsLayer::new()
    }
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "GifVault API v1"
}
