//! In-process cache with per-entry expiry.

use super::CacheInterface;
use async_trait::async_trait;
use gifvault_core::GifVaultResult;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// A single cached value with its expiry timestamp.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    expires_at: Instant,
}

impl CacheEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Thread-safe in-process cache.
///
/// Expiry is checked lazily at read time; nothing sweeps the map in the
/// background. Writers for different keys never observe each other's
/// partial state, and for the same key last-write-wins.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl MemoryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of live (non-expired) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .values()
            .filter(|e| !e.is_expired(now))
            .count()
    }

    /// Returns true if no live entry remains.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CacheInterface for MemoryCache {
    async fn get_raw(&self, key: &str) -> GifVaultResult<Option<String>> {
        let now = Instant::now();

        let expired = {
            let entries = self.entries.read();
            match entries.get(key) {
                Some(entry) if !entry.is_expired(now) => {
                    debug!("Cache hit for key '{}'", key);
                    return Ok(Some(entry.value.clone()));
                }
                Some(_) => true,
                None => false,
            }
        };

        // Lazy eviction: drop the stale entry on the way out.
        if expired {
            let mut entries = self.entries.write();
            if entries.get(key).is_some_and(|e| e.is_expired(now)) {
                entries.remove(key);
            }
            debug!("Cache entry expired for key '{}'", key);
        } else {
            debug!("Cache miss for key '{}'", key);
        }

        Ok(None)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> GifVaultResult<()> {
        let entry = CacheEntry {
            value: value.to_string(),
            expires_at: Instant::now() + ttl,
        };

        self.entries.write().insert(key.to_string(), entry);
        debug!("Cached key '{}' with TTL {}s", key, ttl.as_secs());
        Ok(())
    }

    async fn delete(&self, key: &str) -> GifVaultResult<bool> {
        Ok(self.entries.write().remove(key).is_some())
    }
}
