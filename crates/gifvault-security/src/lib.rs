//! # GifVault Security
//!
//! JWT access tokens and Argon2 password hashing.

pub mod jwt;
pub mod password;

pub use jwt::*;
pub use password::*;
