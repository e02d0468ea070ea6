//! # GifVault Config
//!
//! Layered configuration loading for GifVault: TOML files plus
//! `GIFVAULT_`-prefixed environment variables.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
