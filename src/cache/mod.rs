//! Cache Module
//!
//! Provides in-memory per-customer collection caches with TTL expiration.

mod clock;
mod collection;
mod entry;
mod key;
mod stats;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use collection::CollectionCache;
pub use entry::CacheEntry;
pub use key::CacheKey;
pub use stats::CacheStats;

// == Public Constants ==
/// Shortest TTL a cache accepts
pub const MIN_TTL_MINUTES: u32 = 1;

/// TTL used when configuration does not override it
pub const DEFAULT_TTL_MINUTES: u32 = 5;
