//! In-memory caching layer for fetched boosts

use questboost_core::{Boost, BoostId};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Cached item with expiration
struct CacheEntry<T> {
    value: T,
    inserted_at: Instant,
    ttl: Duration,
}

impl<T> CacheEntry<T> {
    fn is_expired(&self) -> bool {
        self.inserted_at.elapsed() > self.ttl
    }
}

/// Thread-safe cache of boost snapshots keyed by id, with TTL and max-entry bounds
pub struct BoostCache {
    boosts: RwLock<HashMap<BoostId, CacheEntry<Boost>>>,
    default_ttl: Duration,
    max_entries: usize,
}

impl BoostCache {
    pub fn with_capacity(default_ttl: Duration, max_entries: usize) -> Self {
        Self {
            boosts: RwLock::new(HashMap::new()),
            default_ttl,
            max_entries,
        }
    }

    pub fn new(default_ttl: Duration) -> Self {
        Self::with_capacity(default_ttl, 200)
    }

    /// Get a boost from cache if not expired
    pub fn get(&self, id: BoostId) -> Option<Boost> {
        let cache = self.boosts.read().ok()?;
        let entry = cache.get(&id)?;

        if entry.is_expired() {
            None
        } else {
            Some(entry.value.clone())
        }
    }

    /// Insert or update a boost.
    /// Evicts expired entries, then the oldest one, when at capacity.
    pub fn insert(&self, boost: Boost) {
        if let Ok(mut cache) = self.boosts.write() {
            Self::insert_locked(&mut cache, boost, self.default_ttl, self.max_entries);
        }
    }

    /// Replace the cached snapshot with a freshly fetched boost list
    pub fn insert_all(&self, boosts: &[Boost]) {
        if let Ok(mut cache) = self.boosts.write() {
            cache.clear();
            for boost in boosts {
                Self::insert_locked(&mut cache, boost.clone(), self.default_ttl, self.max_entries);
            }
        }
    }

    fn insert_locked(
        cache: &mut HashMap<BoostId, CacheEntry<Boost>>,
        boost: Boost,
        ttl: Duration,
        max_entries: usize,
    ) {
        if !cache.contains_key(&boost.id) {
            if cache.len() >= max_entries {
                cache.retain(|_, entry| !entry.is_expired());
            }

            if cache.len() >= max_entries {
                if let Some(oldest_key) = cache
                    .iter()
                    .min_by_key(|(_, e)| e.inserted_at)
                    .map(|(k, _)| *k)
                {
                    cache.remove(&oldest_key);
                }
            }
        }

        cache.insert(
            boost.id,
            CacheEntry {
                value: boost,
                inserted_at: Instant::now(),
                ttl,
            },
        );
    }

    pub fn invalidate(&self, id: BoostId) {
        if let Ok(mut cache) = self.boosts.write() {
            cache.remove(&id);
        }
    }

    /// Clear all expired entries
    pub fn cleanup(&self) {
        if let Ok(mut cache) = self.boosts.write() {
            cache.retain(|_, entry| !entry.is_expired());
        }
    }

    pub fn clear(&self) {
        if let Ok(mut cache) = self.boosts.write() {
            cache.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.boosts.read().map(|c| c.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BoostCache {
    fn default() -> Self {
        // Boost lists change rarely; 60s keeps detail lookups off the network
        Self::with_capacity(Duration::from_secs(60), 200)
    }
}
