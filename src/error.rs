//! Error types for the calculator service
//!
//! The arithmetic pipeline itself is infallible (bad input degrades to
//! NaN, arithmetic edges are ordinary values), so the only typed error
//! here is the cache store fault. It is a value consumed by the cache
//! decorator: a failed read or write downgrades the request to an
//! uncached computation, it never fails the request or the process.

use std::time::Duration;

use thiserror::Error;

// == Cache Error Enum ==
/// Faults raised by a cache store backend.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The store could not be reached while establishing the connection
    #[error("cache store unreachable: {0}")]
    Unavailable(String),

    /// A store call exceeded its time budget
    #[error("cache operation timed out after {0:?}")]
    Timeout(Duration),

    /// The store reported an error on an individual operation
    #[error("cache store error: {0}")]
    Store(#[from] redis::RedisError),

    /// A stored payload could not be encoded or decoded
    #[error("cache payload codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for cache store operations.
pub type CacheResult<T> = std::result::Result<T, CacheError>;
