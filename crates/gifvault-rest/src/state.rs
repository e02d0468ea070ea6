//! Application state for Axum handlers.

use gifvault_service::{AuthService, GifService};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub gif_service: Arc<dyn GifService>,
    pub auth_service: Arc<dyn AuthService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(gif_service: Arc<dyn GifService>, auth_service: Arc<dyn AuthService>) -> Self {
        Self {
            gif_service,
            auth_service,
        }
    }
}
