//! Response Cache Decorator
//!
//! Middleware that wraps the arithmetic routes with a time-bounded
//! memoization layer. The key is the verbatim request target (path plus
//! query string, parameter order preserved). A store fault on either
//! side of the lookup degrades the request to an uncached computation;
//! it never fails the request.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use super::handlers::AppState;
use crate::cache::{CacheStats, CachedResponse, ResponseCache};

// == Cache Middleware ==
/// Decorates a route handler with the response cache.
///
/// With no cache store configured this is a pure pass-through. With one
/// configured: a fresh entry is replayed without invoking the handler; a
/// miss invokes the handler, stores the captured response under the key,
/// and returns it. There is no request coalescing: concurrent misses for
/// the same key each compute independently.
pub async fn cache_response(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let Some(cache) = state.cache.clone() else {
        return next.run(req).await;
    };

    // Verbatim request target: `a=1&b=2` and `b=2&a=1` are distinct keys.
    let key = req
        .uri()
        .path_and_query()
        .map(|target| target.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    match cache.get(&key).await {
        Ok(Some(cached)) => {
            state.stats.record_hit();
            debug!(key = %key, "cache hit");
            return cached.into_response();
        }
        Ok(None) => {
            state.stats.record_miss();
            debug!(key = %key, "cache miss");
        }
        Err(err) => {
            state.stats.record_bypass();
            warn!(key = %key, error = %err, "cache read failed, serving uncached");
            return next.run(req).await;
        }
    }

    let response = next.run(req).await;
    capture_and_store(&cache, &state.stats, &key, response).await
}

// == Capture And Store ==
/// Buffers a freshly computed response, stores it when cacheable, and
/// rebuilds it for the caller. Only 200 responses with UTF-8 bodies are
/// stored; everything else passes through untouched.
async fn capture_and_store(
    cache: &Arc<dyn ResponseCache>,
    stats: &CacheStats,
    key: &str,
    response: Response,
) -> Response {
    if response.status() != StatusCode::OK {
        return response;
    }

    let (parts, body) = response.into_parts();
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!(key = %key, error = %err, "failed to buffer response body");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    if let Ok(body_text) = std::str::from_utf8(&bytes) {
        let content_type = parts
            .headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("text/plain; charset=utf-8");
        let captured = CachedResponse::new(body_text, content_type);

        if let Err(err) = cache.set(key, captured).await {
            stats.record_bypass();
            warn!(key = %key, error = %err, "cache write failed, response not stored");
        }
    }

    Response::from_parts(parts, Body::from(bytes))
}
