//! API Routes
//!
//! Configures the Axum router: the five arithmetic routes behind the
//! response-cache decorator, the stats and health endpoints, and the
//! static calculator form as the fallback.

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::error;

use super::cache_layer::cache_response;
use super::handlers::{
    add_handler, divide_handler, exponent_handler, health_handler, multiply_handler,
    stats_handler, subtract_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /add`, `/subtract`, `/multiply`, `/divide`, `/exponent` -
///   arithmetic over `?a=...&b=...`, text/plain, behind the cache decorator
/// - `GET /stats` - cache decorator counters
/// - `GET /health` - health check endpoint
/// - static fallback - the browser calculator form under `public/`
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
/// - Catch-panic: converts a panicking handler into a generic 500
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // The five operations share the cache decorator; nothing else does.
    let operations = Router::new()
        .route("/add", get(add_handler))
        .route("/subtract", get(subtract_handler))
        .route("/multiply", get(multiply_handler))
        .route("/divide", get(divide_handler))
        .route("/exponent", get(exponent_handler))
        .layer(middleware::from_fn_with_state(state.clone(), cache_response));

    Router::new()
        .merge(operations)
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .fallback_service(ServeDir::new("public"))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// Converts a handler panic into a generic server error response.
///
/// A panic must never take the process down with it; the caller gets a
/// JSON 500 and the panic payload goes to the log.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    error!(detail = %detail, "request handler panicked");

    let body = Json(json!({
        "error": "internal server error"
    }));

    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}
