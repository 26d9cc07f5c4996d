//! Router configuration for the Web API.

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{replies, threads, AppState};

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let thread_routes = post(threads::create_thread)
        .get(threads::list_threads)
        .put(threads::report_thread)
        .delete(threads::delete_thread);

    let reply_routes = post(replies::create_reply)
        .get(replies::get_thread)
        .put(replies::report_reply)
        .delete(replies::delete_reply);

    Router::new()
        .route("/api/threads/:board", thread_routes)
        .route("/api/replies/:board", reply_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}

/// Create the CORS layer.
///
/// With no configured origins (development mode) any origin is allowed;
/// otherwise only the listed origins are.
fn create_cors_layer(origins: &[String]) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::PUT, Method::DELETE];

    let parsed_origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

    if parsed_origins.is_empty() {
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers(Any)
            .allow_origin(Any)
    } else {
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers(Any)
            .allow_origin(parsed_origins)
    }
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}
