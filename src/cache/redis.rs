//! Redis Cache Backend
//!
//! External cache store reached through the `redis` crate's async
//! connection manager. Entry expiry is owned by Redis via `SETEX`, so
//! the service never sweeps this backend. Every store call is bounded
//! by [`STORE_TIMEOUT`] so an unreachable store can only stall a
//! request briefly before the decorator bypasses it.

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands};
use tokio::time::timeout;

use crate::cache::{CachedResponse, ResponseCache, CONNECT_TIMEOUT, STORE_TIMEOUT};
use crate::error::{CacheError, CacheResult};

// == Redis Cache ==
/// Cache backend storing captured responses in Redis.
#[derive(Clone)]
pub struct RedisCache {
    conn: ConnectionManager,
    ttl: u64,
}

impl RedisCache {
    // == Connect ==
    /// Establishes the connection and verifies the store answers.
    ///
    /// Failing here is the startup-fatal path: the owning process must
    /// not come up claiming caching is enabled when the store is
    /// unreachable.
    pub async fn connect(host: &str, port: u16, ttl: u64) -> CacheResult<Self> {
        let url = format!("redis://{host}:{port}/");
        let client = redis::Client::open(url.as_str())
            .map_err(|err| CacheError::Unavailable(err.to_string()))?;

        let conn = timeout(CONNECT_TIMEOUT, ConnectionManager::new(client))
            .await
            .map_err(|_| CacheError::Timeout(CONNECT_TIMEOUT))?
            .map_err(|err| CacheError::Unavailable(err.to_string()))?;

        let cache = Self { conn, ttl };

        // Probe read so a half-open connection fails startup rather
        // than the first request.
        cache.get("startup-probe").await?;

        Ok(cache)
    }
}

#[async_trait]
impl ResponseCache for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<CachedResponse>> {
        let mut conn = self.conn.clone();
        let payload: Option<String> = timeout(STORE_TIMEOUT, conn.get(key))
            .await
            .map_err(|_| CacheError::Timeout(STORE_TIMEOUT))??;

        match payload {
            Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, response: CachedResponse) -> CacheResult<()> {
        let payload = serde_json::to_string(&response)?;
        let mut conn = self.conn.clone();
        let () = timeout(STORE_TIMEOUT, conn.set_ex(key, payload, self.ttl))
            .await
            .map_err(|_| CacheError::Timeout(STORE_TIMEOUT))??;

        Ok(())
    }
}
