//! Keyed storage for memoised results.

use super::key::CacheKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Cache statistics for monitoring and debugging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of lookups answered from the cache
    pub hits: u64,
    /// Number of lookups that had to compute
    pub misses: u64,
    /// Number of results not stored because the cache was full
    pub rejected: u64,
}

impl CacheStats {
    /// Create new cache statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate the cache hit rate.
    ///
    /// Returns 0.0 if no lookups have occurred.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    /// Total lookups.
    pub fn lookups(&self) -> u64 {
        self.hits + self.misses
    }

    /// Record a cache hit.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Record a cache miss.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Record a refused store.
    pub fn record_rejected(&mut self) {
        self.rejected += 1;
    }

    /// Sum of two sets of statistics.
    pub fn combined(&self, other: &CacheStats) -> CacheStats {
        CacheStats {
            hits: self.hits + other.hits,
            misses: self.misses + other.misses,
            rejected: self.rejected + other.rejected,
        }
    }
}

/// Result cache keyed by normalised arguments.
///
/// Entries are never evicted or invalidated. With an entry limit, results
/// arriving after the cache is full are returned to the caller but not
/// stored.
///
/// # Examples
///
/// ```
/// use waypoint_core::memo::{CacheKey, MemoCache};
///
/// let mut cache: MemoCache<u32> = MemoCache::new();
/// let key = CacheKey::from_args(&(7usize,)).unwrap();
///
/// assert_eq!(cache.get_or_insert_with(key.clone(), || 49), 49);
/// assert_eq!(cache.get_or_insert_with(key, || unreachable!()), 49);
/// assert_eq!(cache.stats().hits, 1);
/// ```
#[derive(Debug, Clone)]
pub struct MemoCache<V> {
    entries: HashMap<CacheKey, V>,
    limit: Option<usize>,
    stats: CacheStats,
    full_reported: bool,
}

impl<V> Default for MemoCache<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> MemoCache<V> {
    /// Create an empty, unbounded cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            limit: None,
            stats: CacheStats::default(),
            full_reported: false,
        }
    }

    /// Create an empty cache that stores at most `limit` entries.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::new()
        }
    }

    /// Look up `key`, recording a hit or a miss.
    pub fn get(&mut self, key: &CacheKey) -> Option<&V> {
        match self.entries.get(key) {
            Some(value) => {
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Look up `key` without touching the statistics.
    pub fn peek(&self, key: &CacheKey) -> Option<&V> {
        self.entries.get(key)
    }

    /// Store `value` under `key`.
    ///
    /// Returns `false` when the cache is full and the value was dropped.
    pub fn insert(&mut self, key: CacheKey, value: V) -> bool {
        if let Some(limit) = self.limit {
            if self.entries.len() >= limit && !self.entries.contains_key(&key) {
                self.stats.record_rejected();
                if !self.full_reported {
                    self.full_reported = true;
                    tracing::warn!(
                        limit,
                        "memo cache full; further results are computed but not stored"
                    );
                }
                return false;
            }
        }
        self.entries.insert(key, value);
        true
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    pub fn get_or_insert_with<F>(&mut self, key: CacheKey, compute: F) -> V
    where
        V: Clone,
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(&key) {
            return value.clone();
        }
        let value = compute();
        self.insert(key, value.clone());
        value
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Configured entry limit, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Lookup statistics so far.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}
