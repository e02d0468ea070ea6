//! # GifVault Service
//!
//! Business logic: the GIF facade over the cached catalog client and the
//! favorite store, and the authentication boundary.

pub mod auth_service;
pub mod dto;
pub mod gif_service;

#[path = "impl/mod.rs"]
pub mod service_impl;

pub use auth_service::{AuthService, AuthServiceImpl};
pub use dto::*;
pub use gif_service::GifService;
pub use service_impl::GifServiceImpl;
