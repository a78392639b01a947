//! Response DTOs for the calculator API
//!
//! Defines the structure of the JSON endpoints (`/stats`, `/health`).
//! The arithmetic routes respond with plain text and have no DTO.

use serde::Serialize;

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Requests served from the cache
    pub hits: u64,
    /// Requests that computed and stored a fresh response
    pub misses: u64,
    /// Requests served uncached because the cache store faulted
    pub bypasses: u64,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from decorator counters
    pub fn new(hits: u64, misses: u64, bypasses: u64) -> Self {
        let total = hits + misses;
        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            bypasses,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Whether the response cache decorator is active
    pub caching_enabled: bool,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(caching_enabled: bool) -> Self {
        Self {
            status: "healthy".to_string(),
            caching_enabled,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
