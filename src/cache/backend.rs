//! Cache Backend Trait
//!
//! The seam between the cache decorator and whichever store holds the
//! captured responses. Store faults are ordinary `CacheError` values so
//! the decorator can degrade to an uncached computation.

use async_trait::async_trait;

use crate::cache::CachedResponse;
use crate::error::CacheResult;

// == Response Cache Trait ==
/// Asynchronous store of captured responses, keyed by request target.
#[async_trait]
pub trait ResponseCache: Send + Sync {
    /// Looks up a fresh entry. `Ok(None)` is an ordinary miss; `Err` is
    /// a store fault the caller should treat as "serve uncached".
    async fn get(&self, key: &str) -> CacheResult<Option<CachedResponse>>;

    /// Stores a captured response under the key for the configured TTL.
    async fn set(&self, key: &str, response: CachedResponse) -> CacheResult<()>;
}
