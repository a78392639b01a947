//! In-Memory Cache Backend
//!
//! Wraps the [`ResponseStore`] behind the backend trait for
//! single-process deployments and for the test suite. Operations on the
//! in-process store cannot fault, so this backend never returns an error.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::cache::{CachedResponse, ResponseCache, ResponseStore};
use crate::error::CacheResult;

// == Memory Cache ==
/// Thread-safe in-process cache backend.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<ResponseStore>>,
}

impl MemoryCache {
    /// Creates a backend whose entries expire after `ttl` seconds.
    pub fn new(ttl: u64) -> Self {
        Self {
            store: Arc::new(RwLock::new(ResponseStore::new(ttl))),
        }
    }

    /// Returns a handle to the underlying store, for the cleanup task.
    pub fn store(&self) -> Arc<RwLock<ResponseStore>> {
        Arc::clone(&self.store)
    }
}

#[async_trait]
impl ResponseCache for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<CachedResponse>> {
        // Write lock: a get may drop an expired entry.
        let mut store = self.store.write().await;
        Ok(store.get(key))
    }

    async fn set(&self, key: &str, response: CachedResponse) -> CacheResult<()> {
        let mut store = self.store.write().await;
        store.insert(key.to_string(), response);
        Ok(())
    }
}
