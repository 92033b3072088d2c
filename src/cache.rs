//! Per-field cache of directory options keyed by parent path

use crate::autocomplete::AutocompleteOption;
use crate::sync::MutexExt;
use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Mutex;

/// Cache strategy for directory listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheStrategy {
    /// Keep every listing for the lifetime of the field (default)
    #[default]
    Full,
    /// LRU cache with maximum entries
    Lru(usize),
    /// No caching - every lookup goes to the provider
    None,
}

impl CacheStrategy {
    /// Validate cache strategy configuration
    ///
    /// # Errors
    ///
    /// Returns error if LRU size is 0
    pub fn validate(&self) -> crate::Result<()> {
        match self {
            CacheStrategy::Lru(0) => Err(crate::Error::InvalidCacheStrategy(
                "LRU cache size must be greater than 0".into(),
            )),
            _ => Ok(()),
        }
    }
}

type Options = Vec<AutocompleteOption>;

enum Store {
    Full(HashMap<String, Options>),
    Lru(LruCache<String, Options>),
    Disabled,
}

/// Keyed option lists, one entry per listed directory.
///
/// The lock is only held for a single lookup or store, never across a
/// provider call.
pub struct ListingCache {
    store: Mutex<Store>,
}

impl ListingCache {
    /// Create a cache for the given strategy.
    ///
    /// An `Lru(0)` strategy that slipped past validation falls back to a
    /// single-entry LRU.
    pub fn new(strategy: CacheStrategy) -> Self {
        let store = match strategy {
            CacheStrategy::Full => Store::Full(HashMap::new()),
            CacheStrategy::Lru(size) => {
                Store::Lru(LruCache::new(NonZeroUsize::new(size).unwrap_or(NonZeroUsize::MIN)))
            }
            CacheStrategy::None => Store::Disabled,
        };
        Self {
            store: Mutex::new(store),
        }
    }

    /// Options cached under `key`, if any
    pub fn get(&self, key: &str) -> Option<Options> {
        match &mut *self.store.lock_recovered() {
            Store::Full(map) => map.get(key).cloned(),
            Store::Lru(lru) => lru.get(key).cloned(),
            Store::Disabled => None,
        }
    }

    /// Store options under `key`, replacing any previous entry
    pub fn insert(&self, key: &str, options: Options) {
        match &mut *self.store.lock_recovered() {
            Store::Full(map) => {
                map.insert(key.to_string(), options);
            }
            Store::Lru(lru) => {
                lru.put(key.to_string(), options);
            }
            Store::Disabled => {}
        }
    }

    /// Drop the entry for `key`; returns whether one existed
    pub fn remove(&self, key: &str) -> bool {
        match &mut *self.store.lock_recovered() {
            Store::Full(map) => map.remove(key).is_some(),
            Store::Lru(lru) => lru.pop(key).is_some(),
            Store::Disabled => false,
        }
    }

    /// Whether `key` is cached (does not touch LRU order)
    pub fn contains(&self, key: &str) -> bool {
        match &*self.store.lock_recovered() {
            Store::Full(map) => map.contains_key(key),
            Store::Lru(lru) => lru.contains(key),
            Store::Disabled => false,
        }
    }

    /// Number of cached keys
    pub fn len(&self) -> usize {
        match &*self.store.lock_recovered() {
            Store::Full(map) => map.len(),
            Store::Lru(lru) => lru.len(),
            Store::Disabled => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry
    pub fn clear(&self) {
        match &mut *self.store.lock_recovered() {
            Store::Full(map) => map.clear(),
            Store::Lru(lru) => lru.clear(),
            Store::Disabled => {}
        }
    }
}

impl Default for ListingCache {
    fn default() -> Self {
        Self::new(CacheStrategy::default())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(names: &[&str]) -> Options {
        names
            .iter()
            .map(|name| AutocompleteOption::new(*name, format!("/{name}")))
            .collect()
    }

    #[test]
    fn test_validate_rejects_empty_lru() {
        assert!(CacheStrategy::Lru(0).validate().is_err());
        assert!(CacheStrategy::Lru(4).validate().is_ok());
        assert!(CacheStrategy::Full.validate().is_ok());
        assert!(CacheStrategy::None.validate().is_ok());
    }

    #[test]
    fn test_full_cache_keeps_everything() {
        let cache = ListingCache::new(CacheStrategy::Full);
        for key in ["/a", "/b", "/c"] {
            cache.insert(key, opts(&["x"]));
        }

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get("/a"), Some(opts(&["x"])));
        assert!(cache.remove("/a"));
        assert!(!cache.remove("/a"));
        assert!(!cache.contains("/a"));
    }

    #[test]
    fn test_insert_replaces_previous_entry() {
        let cache = ListingCache::default();
        cache.insert("/", opts(&["old"]));
        cache.insert("/", opts(&["new"]));

        assert_eq!(cache.get("/"), Some(opts(&["new"])));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_lru_evicts_least_recent() {
        let cache = ListingCache::new(CacheStrategy::Lru(2));
        cache.insert("/a", opts(&["1"]));
        cache.insert("/b", opts(&["2"]));

        // Touch /a so /b becomes the eviction candidate
        assert!(cache.get("/a").is_some());
        cache.insert("/c", opts(&["3"]));

        assert!(cache.contains("/a"));
        assert!(!cache.contains("/b"));
        assert!(cache.contains("/c"));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_disabled_cache_stores_nothing() {
        let cache = ListingCache::new(CacheStrategy::None);
        cache.insert("/a", opts(&["1"]));

        assert!(cache.get("/a").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let cache = ListingCache::new(CacheStrategy::Lru(8));
        cache.insert("/a", opts(&["1"]));
        cache.insert("/b", opts(&[]));
        cache.clear();

        assert!(cache.is_empty());
    }

    #[test]
    fn test_strategy_serde() {
        let strategy: CacheStrategy = serde_json::from_str(r#"{"lru": 16}"#).unwrap();
        assert_eq!(strategy, CacheStrategy::Lru(16));
        let strategy: CacheStrategy = serde_json::from_str(r#""full""#).unwrap();
        assert_eq!(strategy, CacheStrategy::Full);
    }
}
