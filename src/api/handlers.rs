//! API Handlers
//!
//! One thin handler per arithmetic route, all delegating to the same
//! parse → apply → format pipeline, plus the stats and health endpoints.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::cache::{CacheStats, ResponseCache};
use crate::calc::{format_result, parse_operand, Operation};
use crate::models::{HealthResponse, OperandPair, StatsResponse};

/// Application state shared across handlers and the cache decorator.
///
/// The cache store is an injected dependency: `None` means the decorator
/// passes every request straight through to its handler.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache store client, absent when caching is disabled
    pub cache: Option<Arc<dyn ResponseCache>>,
    /// Decorator outcome counters
    pub stats: Arc<CacheStats>,
}

impl AppState {
    /// Creates state with caching disabled.
    pub fn disabled() -> Self {
        Self {
            cache: None,
            stats: Arc::new(CacheStats::new()),
        }
    }

    /// Creates state wired to the given cache store.
    pub fn with_cache(cache: Arc<dyn ResponseCache>) -> Self {
        Self {
            cache: Some(cache),
            stats: Arc::new(CacheStats::new()),
        }
    }
}

// == Evaluate ==
/// Runs the request-to-result pipeline for one operation.
///
/// Unparseable or absent operands arrive here as NaN and flow through
/// to the formatter's NaN token; the response status stays 200.
fn evaluate(operation: Operation, params: &OperandPair) -> String {
    let a = parse_operand(params.a.as_deref());
    let b = parse_operand(params.b.as_deref());
    format_result(operation.apply(a, b))
}

/// Handler for GET /add
pub async fn add_handler(Query(params): Query<OperandPair>) -> String {
    evaluate(Operation::Add, &params)
}

/// Handler for GET /subtract
pub async fn subtract_handler(Query(params): Query<OperandPair>) -> String {
    evaluate(Operation::Subtract, &params)
}

/// Handler for GET /multiply
pub async fn multiply_handler(Query(params): Query<OperandPair>) -> String {
    evaluate(Operation::Multiply, &params)
}

/// Handler for GET /divide
pub async fn divide_handler(Query(params): Query<OperandPair>) -> String {
    evaluate(Operation::Divide, &params)
}

/// Handler for GET /exponent
pub async fn exponent_handler(Query(params): Query<OperandPair>) -> String {
    evaluate(Operation::Exponent, &params)
}

/// Handler for GET /stats
///
/// Returns the decorator's hit/miss/bypass counters.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse::new(
        state.stats.hits(),
        state.stats.misses(),
        state.stats.bypasses(),
    ))
}

/// Handler for GET /health
///
/// Returns liveness status for deployment health checks.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.cache.is_some()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: &str, b: &str) -> Query<OperandPair> {
        Query(OperandPair {
            a: Some(a.to_string()),
            b: Some(b.to_string()),
        })
    }

    #[tokio::test]
    async fn test_add_handler() {
        assert_eq!(add_handler(pair("5", "15")).await, "20");
        assert_eq!(add_handler(pair("1", "1")).await, "2");
    }

    #[tokio::test]
    async fn test_subtract_handler() {
        assert_eq!(subtract_handler(pair("1", "-1")).await, "2");
    }

    #[tokio::test]
    async fn test_multiply_handler() {
        assert_eq!(multiply_handler(pair("0", "4")).await, "0");
    }

    #[tokio::test]
    async fn test_divide_handler() {
        assert_eq!(divide_handler(pair("5", "2")).await, "2.5");
        assert_eq!(divide_handler(pair("1", "0")).await, "∞");
        assert_eq!(divide_handler(pair("-1", "0")).await, "-∞");
    }

    #[tokio::test]
    async fn test_exponent_handler() {
        assert_eq!(exponent_handler(pair("4", "2")).await, "16");
    }

    #[tokio::test]
    async fn test_non_numeric_operand_yields_nan_body() {
        assert_eq!(add_handler(pair("abc", "1")).await, "NaN");
    }

    #[tokio::test]
    async fn test_missing_operand_yields_nan_body() {
        let params = Query(OperandPair {
            a: Some("1".to_string()),
            b: None,
        });
        assert_eq!(add_handler(params).await, "NaN");
    }

    #[tokio::test]
    async fn test_grouped_operands() {
        assert_eq!(add_handler(pair("1,000", "500")).await, "1,500");
    }

    #[tokio::test]
    async fn test_stats_handler_reports_counters() {
        let state = AppState::disabled();
        state.stats.record_hit();
        state.stats.record_miss();

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 1);
        assert_eq!(response.misses, 1);
        assert_eq!(response.hit_rate, 0.5);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler(State(AppState::disabled())).await;
        assert_eq!(response.status, "healthy");
        assert!(!response.caching_enabled);
    }
}
