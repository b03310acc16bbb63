//! Collection Cache Module
//!
//! Per-customer collection store with a fixed TTL and lazy expiry on read.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, info};

use crate::cache::{CacheEntry, CacheKey, CacheStats, Clock, SystemClock, MIN_TTL_MINUTES};
use crate::error::{CacheError, Result};

// == Collection Cache ==
/// Maps (company, customer) to a collection of `T` that expires after a
/// fixed TTL.
///
/// Expired entries are never returned. They are removed when next read, or
/// in bulk by [`CollectionCache::cleanup_expired`].
#[derive(Debug)]
pub struct CollectionCache<T, C = SystemClock> {
    /// Keyed storage
    entries: HashMap<CacheKey, CacheEntry<T>>,
    /// Performance statistics
    stats: CacheStats,
    /// Lifetime applied to every entry
    ttl: Duration,
    /// Time source
    clock: C,
}

impl<T> CollectionCache<T, SystemClock> {
    // == Constructor ==
    /// Creates a cache whose entries live for `ttl_minutes`.
    ///
    /// Fails with `InvalidArgument` when `ttl_minutes` is below one minute.
    pub fn new(ttl_minutes: u32) -> Result<Self> {
        Self::with_clock(ttl_minutes, SystemClock)
    }
}

impl<T, C: Clock> CollectionCache<T, C> {
    /// Creates a cache driven by a custom clock.
    pub fn with_clock(ttl_minutes: u32, clock: C) -> Result<Self> {
        if ttl_minutes < MIN_TTL_MINUTES {
            return Err(CacheError::InvalidArgument(format!(
                "TTL must be at least {} minute, got {}",
                MIN_TTL_MINUTES, ttl_minutes
            )));
        }

        Ok(Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl: Duration::minutes(i64::from(ttl_minutes)),
            clock,
        })
    }

    // == Set ==
    /// Stores `items` for the customer, replacing any previous collection.
    ///
    /// The cache takes ownership of `items`; the expiry is reset to now + TTL.
    pub fn set(&mut self, company: &str, customer: &str, items: Vec<T>) -> Result<()> {
        let key = CacheKey::new(company, customer)?;
        let entry = CacheEntry::new(items, self.clock.now(), self.ttl);

        debug!(key = %key, items = entry.item_count(), "caching collection");
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Get ==
    /// Returns the live collection for the customer, if any.
    ///
    /// An expired entry is evicted and reported as `None`.
    pub fn get(&mut self, company: &str, customer: &str) -> Result<Option<Arc<[T]>>> {
        let key = CacheKey::new(company, customer)?;
        let now = self.clock.now();

        let expired = match self.entries.get(&key) {
            None => {
                self.stats.record_miss();
                return Ok(None);
            }
            Some(entry) if !entry.is_expired_at(now) => {
                self.stats.record_hit();
                return Ok(Some(entry.items()));
            }
            Some(entry) => entry.expires_at,
        };

        self.entries.remove(&key);
        self.stats.record_miss();
        self.stats.record_expirations(1);
        self.stats.set_total_entries(self.entries.len());
        debug!(key = %key, expired_at = %expired, "evicted expired collection on read");

        Ok(None)
    }

    // == Remove ==
    /// Drops the customer's collection. Returns whether anything was stored.
    pub fn remove(&mut self, company: &str, customer: &str) -> Result<bool> {
        let key = CacheKey::new(company, customer)?;
        let removed = self.entries.remove(&key).is_some();
        self.stats.set_total_entries(self.entries.len());
        Ok(removed)
    }

    // == Clear ==
    /// Removes every entry, expired or not.
    pub fn clear(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        self.stats.set_total_entries(0);
        info!(dropped, "cache cleared");
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired_at(now));
        let removed = before - self.entries.len();

        self.stats.record_expirations(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Count ==
    /// Number of stored entries, including expired ones not yet evicted.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The lifetime applied to each entry, in whole minutes.
    pub fn ttl_minutes(&self) -> i64 {
        self.ttl.num_minutes()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }
}
