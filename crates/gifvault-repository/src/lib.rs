//! # GifVault Repository
//!
//! SQLx/MySQL repositories: favorites, users, and the append-only service
//! log. The `(user_id, gif_id)` uniqueness invariant for favorites lives in
//! the database schema; this crate translates its violation into the domain
//! conflict error.

pub mod mysql;
pub mod pool;
pub mod traits;

pub use mysql::*;
pub use pool::{create_pool, DatabasePool};
pub use traits::*;
