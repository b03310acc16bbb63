//! Cache Registry
//!
//! One collection cache per entity kind, built once at startup and shared by
//! handle with whatever needs it.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::{CacheStats, Clock, CollectionCache, SystemClock};
use crate::config::CacheTtls;
use crate::error::{CacheError, Result};
use crate::models::{
    DocumentEntry, DocumentFolder, KindStatsResponse, OrderSummary, RecentPurchasedItem,
};

/// A collection cache behind an async reader/writer lock.
///
/// Reads take the write lock too: `get` evicts lazily and updates stats.
pub type SharedCache<T, C = SystemClock> = Arc<RwLock<CollectionCache<T, C>>>;

// == Cache Kind ==
/// The entity kinds the registry caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CacheKind {
    Documents,
    Folders,
    Quotes,
    Orders,
    RecentlyPurchased,
}

impl CacheKind {
    pub const ALL: [CacheKind; 5] = [
        CacheKind::Documents,
        CacheKind::Folders,
        CacheKind::Quotes,
        CacheKind::Orders,
        CacheKind::RecentlyPurchased,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CacheKind::Documents => "documents",
            CacheKind::Folders => "folders",
            CacheKind::Quotes => "quotes",
            CacheKind::Orders => "orders",
            CacheKind::RecentlyPurchased => "recently-purchased",
        }
    }
}

impl fmt::Display for CacheKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CacheKind {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        CacheKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CacheError::UnknownCache(s.to_string()))
    }
}

// == Registry ==
/// Process-wide set of collection caches, one per [`CacheKind`].
///
/// Cloning is cheap and every clone refers to the same caches.
#[derive(Clone)]
pub struct CacheRegistry<C = SystemClock> {
    pub documents: SharedCache<DocumentEntry, C>,
    pub folders: SharedCache<DocumentFolder, C>,
    pub quotes: SharedCache<OrderSummary, C>,
    pub orders: SharedCache<OrderSummary, C>,
    pub recently_purchased: SharedCache<RecentPurchasedItem, C>,
}

fn shared<T, C: Clock>(ttl_minutes: u32, clock: C) -> Result<SharedCache<T, C>> {
    let cache = CollectionCache::with_clock(ttl_minutes, clock)?;
    Ok(Arc::new(RwLock::new(cache)))
}

impl CacheRegistry {
    // == Constructor ==
    /// Builds every cache with its configured TTL.
    ///
    /// Fails if any TTL is below the one-minute minimum.
    pub fn new(ttls: &CacheTtls) -> Result<Self> {
        Self::with_clock(ttls, SystemClock)
    }

    /// Creates the registry from application configuration.
    pub fn from_config(config: &crate::config::Config) -> Result<Self> {
        Self::new(&config.ttls)
    }
}

impl<C: Clock + Clone> CacheRegistry<C> {
    /// Builds every cache on a shared custom clock.
    pub fn with_clock(ttls: &CacheTtls, clock: C) -> Result<Self> {
        Ok(Self {
            documents: shared(ttls.documents, clock.clone())?,
            folders: shared(ttls.folders, clock.clone())?,
            quotes: shared(ttls.quotes, clock.clone())?,
            orders: shared(ttls.orders, clock.clone())?,
            recently_purchased: shared(ttls.recently_purchased, clock)?,
        })
    }

    // == Clear ==
    /// Empties one cache, e.g. before a forced refresh.
    pub async fn clear(&self, kind: CacheKind) {
        match kind {
            CacheKind::Documents => self.documents.write().await.clear(),
            CacheKind::Folders => self.folders.write().await.clear(),
            CacheKind::Quotes => self.quotes.write().await.clear(),
            CacheKind::Orders => self.orders.write().await.clear(),
            CacheKind::RecentlyPurchased => self.recently_purchased.write().await.clear(),
        }
        info!(kind = %kind, "cleared cache");
    }

    /// Empties every cache.
    pub async fn clear_all(&self) {
        for kind in CacheKind::ALL {
            self.clear(kind).await;
        }
    }

    // == Count ==
    /// Stored entries in one cache, including expired ones not yet swept.
    pub async fn count(&self, kind: CacheKind) -> usize {
        match kind {
            CacheKind::Documents => self.documents.read().await.count(),
            CacheKind::Folders => self.folders.read().await.count(),
            CacheKind::Quotes => self.quotes.read().await.count(),
            CacheKind::Orders => self.orders.read().await.count(),
            CacheKind::RecentlyPurchased => self.recently_purchased.read().await.count(),
        }
    }

    // == Sweep ==
    /// Removes expired entries from every cache.
    ///
    /// Returns the total number removed.
    pub async fn sweep_expired(&self) -> usize {
        let mut total = 0;
        for kind in CacheKind::ALL {
            let removed = match kind {
                CacheKind::Documents => self.documents.write().await.cleanup_expired(),
                CacheKind::Folders => self.folders.write().await.cleanup_expired(),
                CacheKind::Quotes => self.quotes.write().await.cleanup_expired(),
                CacheKind::Orders => self.orders.write().await.cleanup_expired(),
                CacheKind::RecentlyPurchased => {
                    self.recently_purchased.write().await.cleanup_expired()
                }
            };
            if removed > 0 {
                debug!(kind = %kind, removed, "swept expired entries");
            }
            total += removed;
        }
        total
    }

    // == Stats ==
    /// Per-kind statistics, in [`CacheKind::ALL`] order.
    pub async fn stats(&self) -> Vec<KindStatsResponse> {
        let mut out = Vec::with_capacity(CacheKind::ALL.len());
        for kind in CacheKind::ALL {
            let (ttl, stats) = match kind {
                CacheKind::Documents => snapshot(&self.documents).await,
                CacheKind::Folders => snapshot(&self.folders).await,
                CacheKind::Quotes => snapshot(&self.quotes).await,
                CacheKind::Orders => snapshot(&self.orders).await,
                CacheKind::RecentlyPurchased => snapshot(&self.recently_purchased).await,
            };
            out.push(KindStatsResponse::new(kind, ttl, &stats));
        }
        out
    }
}

async fn snapshot<T, C: Clock>(cache: &SharedCache<T, C>) -> (i64, CacheStats) {
    let guard = cache.read().await;
    (guard.ttl_minutes(), guard.stats())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    use crate::cache::ManualClock;
    use crate::models::OrderKind;

    fn order(no: &str) -> OrderSummary {
        OrderSummary {
            sales_order_no: no.to_string(),
            kind: OrderKind::Order,
            order_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            expiration_date: None,
            status: "Open".to_string(),
            customer_po_no: None,
            total: 100.0,
        }
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("orders".parse::<CacheKind>().unwrap(), CacheKind::Orders);
        assert_eq!(
            "Recently-Purchased".parse::<CacheKind>().unwrap(),
            CacheKind::RecentlyPurchased
        );
        assert!(matches!(
            "invoices".parse::<CacheKind>(),
            Err(CacheError::UnknownCache(_))
        ));
    }

    #[test]
    fn test_kind_display_roundtrip() {
        for kind in CacheKind::ALL {
            assert_eq!(kind.to_string().parse::<CacheKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let ttls = CacheTtls {
            folders: 0,
            ..CacheTtls::default()
        };
        assert!(matches!(
            CacheRegistry::new(&ttls),
            Err(CacheError::InvalidArgument(_))
        ));
    }

    #[tokio::test]
    async fn test_quotes_and_orders_are_separate() {
        let registry = CacheRegistry::new(&CacheTtls::default()).unwrap();

        registry
            .orders
            .write()
            .await
            .set("ABC", "100", vec![order("0000001")])
            .unwrap();

        assert!(registry.quotes.write().await.get("ABC", "100").unwrap().is_none());
        assert_eq!(registry.count(CacheKind::Orders).await, 1);
        assert_eq!(registry.count(CacheKind::Quotes).await, 0);
    }

    #[tokio::test]
    async fn test_clones_share_caches() {
        let registry = CacheRegistry::new(&CacheTtls::default()).unwrap();
        let handle = registry.clone();

        handle
            .orders
            .write()
            .await
            .set("ABC", "100", vec![order("0000001")])
            .unwrap();

        assert_eq!(registry.count(CacheKind::Orders).await, 1);
    }

    #[tokio::test]
    async fn test_clear_one_and_all() {
        let registry = CacheRegistry::new(&CacheTtls::default()).unwrap();

        registry.orders.write().await.set("ABC", "1", vec![order("1")]).unwrap();
        registry.quotes.write().await.set("ABC", "1", vec![order("2")]).unwrap();

        registry.clear(CacheKind::Orders).await;
        assert_eq!(registry.count(CacheKind::Orders).await, 0);
        assert_eq!(registry.count(CacheKind::Quotes).await, 1);

        registry.clear_all().await;
        for kind in CacheKind::ALL {
            assert_eq!(registry.count(kind).await, 0);
        }
    }

    #[tokio::test]
    async fn test_stats_report_ttls() {
        let ttls = CacheTtls {
            recently_purchased: 15,
            ..CacheTtls::default()
        };
        let registry = CacheRegistry::new(&ttls).unwrap();

        let stats = registry.stats().await;
        assert_eq!(stats.len(), 5);
        assert_eq!(stats[0].kind, CacheKind::Documents);
        assert_eq!(stats[0].ttl_minutes, 5);
        assert_eq!(stats[4].kind, CacheKind::RecentlyPurchased);
        assert_eq!(stats[4].ttl_minutes, 15);
    }

    #[tokio::test]
    async fn test_sweep_removes_only_expired() {
        let clock = ManualClock::default();
        let ttls = CacheTtls {
            orders: 10,
            ..CacheTtls::default()
        };
        let registry = CacheRegistry::with_clock(&ttls, clock.clone()).unwrap();

        registry.orders.write().await.set("ABC", "1", vec![order("1")]).unwrap();
        registry.quotes.write().await.set("ABC", "1", vec![order("2")]).unwrap();
        clock.advance(Duration::minutes(6));

        assert_eq!(registry.sweep_expired().await, 1);
        assert_eq!(registry.count(CacheKind::Quotes).await, 0);
        assert_eq!(registry.count(CacheKind::Orders).await, 1);
    }

    #[tokio::test]
    async fn test_sweep_on_fresh_entries_removes_nothing() {
        let registry = CacheRegistry::new(&CacheTtls::default()).unwrap();
        registry.orders.write().await.set("ABC", "1", vec![order("1")]).unwrap();

        assert_eq!(registry.sweep_expired().await, 0);
        assert_eq!(registry.count(CacheKind::Orders).await, 1);
    }
}
