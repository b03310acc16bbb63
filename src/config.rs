//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::DEFAULT_TTL_MINUTES;

/// Per-kind cache lifetimes, in minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheTtls {
    pub documents: u32,
    pub folders: u32,
    pub quotes: u32,
    pub orders: u32,
    pub recently_purchased: u32,
}

impl Default for CacheTtls {
    fn default() -> Self {
        Self {
            documents: DEFAULT_TTL_MINUTES,
            folders: DEFAULT_TTL_MINUTES,
            quotes: DEFAULT_TTL_MINUTES,
            orders: DEFAULT_TTL_MINUTES,
            recently_purchased: DEFAULT_TTL_MINUTES,
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache lifetimes
    pub ttls: CacheTtls,
    /// HTTP server port
    pub server_port: u16,
    /// Background sweep interval in seconds
    pub sweep_interval: u64,
}

/// Reads and parses `name`, falling back to `default` when unset or invalid.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SWEEP_INTERVAL` - Expired-entry sweep frequency in seconds (default: 60)
    /// - `DOCUMENTS_TTL_MINUTES`, `FOLDERS_TTL_MINUTES`, `QUOTES_TTL_MINUTES`,
    ///   `ORDERS_TTL_MINUTES`, `RECENTLY_PURCHASED_TTL_MINUTES` - cache
    ///   lifetimes (default: 5 each)
    ///
    /// A TTL of 0 parses but is rejected when the registry is built.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ttls: CacheTtls {
                documents: env_or("DOCUMENTS_TTL_MINUTES", defaults.ttls.documents),
                folders: env_or("FOLDERS_TTL_MINUTES", defaults.ttls.folders),
                quotes: env_or("QUOTES_TTL_MINUTES", defaults.ttls.quotes),
                orders: env_or("ORDERS_TTL_MINUTES", defaults.ttls.orders),
                recently_purchased: env_or(
                    "RECENTLY_PURCHASED_TTL_MINUTES",
                    defaults.ttls.recently_purchased,
                ),
            },
            server_port: env_or("SERVER_PORT", defaults.server_port),
            sweep_interval: env_or("SWEEP_INTERVAL", defaults.sweep_interval),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttls: CacheTtls::default(),
            server_port: 3000,
            sweep_interval: 60,
        }
    }
}
