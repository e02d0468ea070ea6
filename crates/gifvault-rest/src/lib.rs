//! # GifVault REST
//!
//! Axum REST layer: controllers, the request-audit middleware, bearer-token
//! authentication, and validated extractors.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
