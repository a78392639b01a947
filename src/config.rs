//! Configuration Module
//!
//! Resolves server configuration from environment variables exactly once
//! at startup; the resulting struct is passed by value into components.

use std::env;

// == Cache Backend Kind ==
/// Which cache store backend to use when caching is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBackendKind {
    /// External Redis store (the default)
    Redis,
    /// In-process TTL store, for single-process deployments and tests
    Memory,
}

impl CacheBackendKind {
    fn from_env_value(value: &str) -> Self {
        if value.eq_ignore_ascii_case("memory") {
            CacheBackendKind::Memory
        } else {
            CacheBackendKind::Redis
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Whether the response cache decorator is active
    pub caching_enabled: bool,
    /// Cache store backend selection
    pub cache_backend: CacheBackendKind,
    /// Cache store host
    pub cache_host: String,
    /// Cache store port
    pub cache_port: u16,
    /// Cached response TTL in seconds
    pub cache_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Memory-backend cleanup task interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `USE_CACHE` - presence enables the response cache (default: disabled)
    /// - `CACHE_BACKEND` - "redis" or "memory" (default: "redis")
    /// - `REDIS_HOST` - cache store host (default: "localhost")
    /// - `REDIS_PORT` - cache store port (default: 6379)
    /// - `CACHE_TTL` - cached response TTL in seconds (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `CLEANUP_INTERVAL` - memory-backend sweep frequency in seconds (default: 30)
    pub fn from_env() -> Self {
        Self {
            caching_enabled: env::var("USE_CACHE").is_ok(),
            cache_backend: env::var("CACHE_BACKEND")
                .map(|v| CacheBackendKind::from_env_value(&v))
                .unwrap_or(CacheBackendKind::Redis),
            cache_host: env::var("REDIS_HOST").unwrap_or_else(|_| "localhost".to_string()),
            cache_port: env::var("REDIS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(6379),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            caching_enabled: false,
            cache_backend: CacheBackendKind::Redis,
            cache_host: "localhost".to_string(),
            cache_port: 6379,
            cache_ttl: 60,
            server_port: 8080,
            cleanup_interval: 30,
        }
    }
}
