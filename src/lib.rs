//! Address Book Cache - self-expiring per-customer collection caches
//!
//! Memoizes the documents, folders, quotes, orders and recently purchased
//! items fetched for a (company, customer) pair, bounding staleness with a
//! per-kind TTL.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod tasks;

pub use api::AppState;
pub use cache::CollectionCache;
pub use config::Config;
pub use error::{CacheError, Result};
pub use registry::{CacheKind, CacheRegistry};
pub use tasks::spawn_sweep_task;
