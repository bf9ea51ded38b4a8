use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Expiration for the cached register collection, in minutes (default: none)
    pub caja_cache_duration_minutes: Option<u64>,
    /// Expiration for the cached branch collection, in minutes (default: none)
    pub sucursal_cache_duration_minutes: Option<u64>,
    /// Maximum number of in-memory cache entries (default: 1,000)
    pub cache_max_entries: usize,
    /// Path to SQLite database file (default: "cajas.db")
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    pub redis_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CAJA_CACHE_DURATION_MINUTES` - Register collection expiration (default: none)
    /// - `SUCURSAL_CACHE_DURATION_MINUTES` - Branch collection expiration (default: none)
    /// - `CACHE_MAX_ENTRIES` - Maximum in-memory cache entries (default: 1,000)
    /// - `SQLITE_PATH` - SQLite database path (default: "cajas.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    ///
    /// Unset or unparsable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            caja_cache_duration_minutes: parse_var("CAJA_CACHE_DURATION_MINUTES"),
            sucursal_cache_duration_minutes: parse_var("SUCURSAL_CACHE_DURATION_MINUTES"),
            cache_max_entries: parse_var::<usize>("CACHE_MAX_ENTRIES")
                .filter(|max| *max > 0)
                .unwrap_or(1_000),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "cajas.db".to_string()),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        }
    }

    /// Get the register collection TTL as a Duration.
    pub fn caja_cache_ttl(&self) -> Option<Duration> {
        self.caja_cache_duration_minutes.map(minutes)
    }

    /// Get the branch collection TTL as a Duration.
    pub fn sucursal_cache_ttl(&self) -> Option<Duration> {
        self.sucursal_cache_duration_minutes.map(minutes)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

fn minutes(m: u64) -> Duration {
    Duration::from_secs(m.saturating_mul(60))
}
