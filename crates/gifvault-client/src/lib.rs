//! # GifVault Client
//!
//! Client for the upstream GIF catalog: a raw HTTP client ([`GiphyClient`]),
//! pure wire-to-domain mapping ([`mapper`]), and a read-through TTL cache
//! decorator ([`CachedGifClient`]).

pub mod cache;
pub mod cached;
pub mod giphy;
pub mod mapper;
pub mod provider;

pub use cache::{CacheExt, CacheInterface, MemoryCache, GIF_CACHE_TTL};
pub use cached::CachedGifClient;
pub use giphy::GiphyClient;
pub use provider::GifProvider;
