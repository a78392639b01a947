//! Cache Entry Module
//!
//! Defines the captured response unit the decorator stores, and the
//! TTL-stamped entry wrapper used by the in-memory store.

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

// == Cached Response ==
/// A previously produced response body together with its content type.
///
/// This is the unit stored under a request-target key: on a cache hit it
/// is replayed verbatim instead of invoking the handler. Serde derives
/// cover the JSON payload stored in Redis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedResponse {
    /// The exact response body previously produced
    pub body: String,
    /// The content-type header the response carried
    pub content_type: String,
}

impl CachedResponse {
    /// Creates a new cached response.
    pub fn new(body: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            content_type: content_type.into(),
        }
    }
}

impl IntoResponse for CachedResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, self.content_type)],
            self.body,
        )
            .into_response()
    }
}

// == Cache Entry ==
/// A stored response with TTL metadata, as kept by the in-memory store.
///
/// Redis entries carry no wrapper; their expiry is owned by the store
/// itself via `SETEX`.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The captured response
    pub response: CachedResponse,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    /// Creates a new entry expiring `ttl_seconds` after now.
    pub fn new(response: CachedResponse, ttl_seconds: u64) -> Self {
        let now = current_timestamp_ms();
        Self {
            response,
            created_at: now,
            expires_at: now + ttl_seconds * 1000,
        }
    }

    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired once the current time is
    /// greater than or equal to its expiration time, so a fully elapsed
    /// TTL takes effect immediately.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    fn sample_response() -> CachedResponse {
        CachedResponse::new("42", "text/plain; charset=utf-8")
    }

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(sample_response(), 60);

        assert_eq!(entry.response.body, "42");
        assert!(entry.expires_at > entry.created_at);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new(sample_response(), 1);

        assert!(!entry.is_expired());

        sleep(Duration::from_millis(1100));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = current_timestamp_ms();
        let entry = CacheEntry {
            response: sample_response(),
            created_at: now,
            expires_at: now, // Expires exactly at creation time
        };

        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }

    #[test]
    fn test_cached_response_json_round_trip() {
        let response = sample_response();
        let payload = serde_json::to_string(&response).unwrap();
        let decoded: CachedResponse = serde_json::from_str(&payload).unwrap();
        assert_eq!(decoded, response);
    }

    #[test]
    fn test_cached_response_into_response() {
        let http = sample_response().into_response();
        assert_eq!(http.status(), StatusCode::OK);
        assert_eq!(
            http.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
    }
}
