//! Response Store Module
//!
//! In-memory store mapping request targets to captured responses with a
//! fixed TTL. There is no LRU tracking and no capacity bound: expiry is
//! the only eviction trigger, matching the store's role as a short-lived
//! memoization layer rather than a general cache.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CachedResponse};

// == Response Store ==
/// TTL-bounded key-value storage for captured responses.
#[derive(Debug)]
pub struct ResponseStore {
    /// Key-value storage; key = verbatim request path + query
    entries: HashMap<String, CacheEntry>,
    /// TTL in seconds applied to every entry
    ttl: u64,
}

impl ResponseStore {
    // == Constructor ==
    /// Creates a new store whose entries expire after `ttl` seconds.
    pub fn new(ttl: u64) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    // == Insert ==
    /// Stores a captured response under a request-target key.
    ///
    /// If the key already exists, the entry is overwritten and its TTL
    /// restarts from now.
    pub fn insert(&mut self, key: String, response: CachedResponse) {
        self.entries.insert(key, CacheEntry::new(response, self.ttl));
    }

    // == Get ==
    /// Retrieves the response stored under a key, if fresh.
    ///
    /// Expired entries are removed on the way out and read as absent.
    pub fn get(&mut self, key: &str) -> Option<CachedResponse> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired() {
                self.entries.remove(key);
                return None;
            }
            return Some(entry.response.clone());
        }
        None
    }

    // == Cleanup Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();

        for key in expired_keys {
            self.entries.remove(&key);
        }

        count
    }

    // == Length ==
    /// Returns the current number of entries in the store.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store is empty.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
