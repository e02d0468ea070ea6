//! In-process caching for provider responses.

pub mod cache_interface;
pub mod cache_keys;
pub mod memory_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use memory_cache::MemoryCache;

use std::time::Duration;

/// Freshness window for provider responses (30 minutes).
pub const GIF_CACHE_TTL: Duration = Duration::from_secs(30 * 60);
