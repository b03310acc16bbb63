//! Cache Entry Module
//!
//! Defines a cached collection together with its expiry instant.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

// == Cache Entry ==
/// A cached collection and the instant it stops being served.
#[derive(Debug)]
pub struct CacheEntry<T> {
    /// The stored items, shared read-only with every reader
    items: Arc<[T]>,
    /// First instant at which the entry counts as expired
    pub expires_at: DateTime<Utc>,
}

// Manual impl: cloning shares the Arc, so T need not be Clone.
impl<T> Clone for CacheEntry<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            expires_at: self.expires_at,
        }
    }
}

impl<T> CacheEntry<T> {
    // == Constructor ==
    /// Creates an entry stamped at `now` that expires `ttl` later.
    pub fn new(items: Vec<T>, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            items: items.into(),
            expires_at: now + ttl,
        }
    }

    // == Items ==
    /// Returns a shared handle to the stored items.
    pub fn items(&self) -> Arc<[T]> {
        Arc::clone(&self.items)
    }

    /// Number of items in the collection.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    // == Is Expired ==
    /// Checks whether the entry has expired as of `now`.
    ///
    /// Expiry is inclusive: an entry read exactly at `expires_at` is already
    /// stale.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-03-01T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(vec!["a", "b"], t0(), Duration::minutes(5));

        assert_eq!(&*entry.items(), &["a", "b"]);
        assert_eq!(entry.item_count(), 2);
        assert_eq!(entry.expires_at, t0() + Duration::minutes(5));
        assert!(!entry.is_expired_at(t0()));
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new(vec![1, 2, 3], t0(), Duration::minutes(5));

        assert!(!entry.is_expired_at(t0() + Duration::minutes(4)));
        assert!(entry.is_expired_at(t0() + Duration::minutes(6)));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let entry = CacheEntry::new(vec![1], t0(), Duration::minutes(5));

        let boundary = t0() + Duration::minutes(5);
        assert!(entry.is_expired_at(boundary), "Entry should be expired at boundary");
        assert!(!entry.is_expired_at(boundary - Duration::milliseconds(1)));
    }

    #[test]
    fn test_items_are_shared_not_copied() {
        let entry = CacheEntry::new(vec![String::from("doc")], t0(), Duration::minutes(1));
        let first = entry.items();
        let second = entry.clone().items();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_empty_collection_is_valid() {
        let entry: CacheEntry<u8> = CacheEntry::new(Vec::new(), t0(), Duration::minutes(1));
        assert_eq!(entry.item_count(), 0);
    }
}
