//! Response DTOs for the cache admin API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::registry::CacheKind;

/// Response body for a cached collection lookup
#[derive(Debug, Clone, Serialize)]
pub struct GetItemsResponse<'a, T> {
    pub kind: CacheKind,
    pub company: String,
    pub customer: String,
    pub items: &'a [T],
}

/// Response body for store, invalidate and clear operations
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn stored(kind: CacheKind, company: &str, customer: &str, count: usize) -> Self {
        Self {
            message: format!("Cached {} {} for {}/{}", count, kind, company, customer),
        }
    }

    pub fn removed(kind: CacheKind, company: &str, customer: &str) -> Self {
        Self {
            message: format!("Removed {} for {}/{}", kind, company, customer),
        }
    }

    pub fn cleared(kinds: &[CacheKind]) -> Self {
        let names: Vec<&str> = kinds.iter().map(|k| k.as_str()).collect();
        Self {
            message: format!("Cleared {}", names.join(", ")),
        }
    }
}

/// Statistics for one cache kind (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct KindStatsResponse {
    pub kind: CacheKind,
    pub ttl_minutes: i64,
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl KindStatsResponse {
    pub fn new(kind: CacheKind, ttl_minutes: i64, stats: &CacheStats) -> Self {
        Self {
            kind,
            ttl_minutes,
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub caches: Vec<KindStatsResponse>,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
