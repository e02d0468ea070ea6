//! Read-through caching decorator for a [`GifProvider`].

use crate::cache::{cache_keys, CacheExt, CacheInterface, GIF_CACHE_TTL};
use crate::provider::GifProvider;
use async_trait::async_trait;
use gifvault_core::{Gif, GifFilter, GifId, GifPage, GifVaultResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Read-through cache in front of the upstream catalog.
///
/// A fresh entry is served without touching the provider; a miss or an
/// expired entry triggers a provider call whose result is stored for the
/// freshness window. Provider and mapping failures propagate untouched and
/// never populate the cache. Concurrent misses for the same key may each
/// call the provider; the cache itself is safe under concurrent fills and
/// the last fill wins.
pub struct CachedGifClient {
    inner: Arc<dyn GifProvider>,
    cache: Arc<dyn CacheInterface>,
    ttl: Duration,
}

impl CachedGifClient {
    /// Wraps a provider with the default 30-minute freshness window.
    #[must_use]
    pub fn new(inner: Arc<dyn GifProvider>, cache: Arc<dyn CacheInterface>) -> Self {
        Self {
            inner,
            cache,
            ttl: GIF_CACHE_TTL,
        }
    }

    /// Wraps a provider with a custom freshness window.
    #[must_use]
    pub fn with_ttl(
        inner: Arc<dyn GifProvider>,
        cache: Arc<dyn CacheInterface>,
        ttl: Duration,
    ) -> Self {
        Self { inner, cache, ttl }
    }

    /// Stores a freshly fetched value.
    ///
    /// A failed cache write is logged and swallowed; the value was fetched
    /// successfully and must still reach the caller.
    async fn store<T: serde::Serialize + Send + Sync>(&self, key: &str, value: &T) {
        if let Err(e) = self.cache.set(key, value, self.ttl).await {
            warn!("Failed to cache entry for key '{}': {}", key, e);
        }
    }
}

#[async_trait]
impl GifProvider for CachedGifClient {
    async fn search(&self, filter: &GifFilter) -> GifVaultResult<GifPage> {
        let key = cache_keys::search(filter);

        if let Some(cached) = self.cache.get::<GifPage>(&key).await? {
            debug!("Serving search from cache: '{}'", key);
            return Ok(cached);
        }

        let page = self.inner.search(filter).await?;
        self.store(&key, &page).await;

        Ok(page)
    }

    async fn get_by_id(&self, id: &GifId) -> GifVaultResult<Gif> {
        let key = cache_keys::show(id);

        if let Some(cached) = self.cache.get::<Gif>(&key).await? {
            debug!("Serving lookup from cache: '{}'", key);
            return Ok(cached);
        }

        let gif = self.inner.get_by_id(id).await?;
        self.store(&key, &gif).await;

        Ok(gif)
    }
}
