//! Route definitions for the dashboard server

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Creates the main application router with all routes and middleware
pub fn create_router(state: Arc<AppState>) -> Router {
    // Allow all origins so the pages can be served from elsewhere if needed
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Dashboard pages
        .route("/", get(handlers::performance_page))
        .route("/delay", get(handlers::delay_page))
        // Health check
        .route("/health", get(handlers::health_check))
        // Dataset information
        .route("/years", get(handlers::list_years))
        // Figure endpoints, one per dashboard
        .route("/api/performance", get(handlers::performance_figures))
        .route("/api/delays", get(handlers::delay_figures))
        // Add middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // Add shared state
        .with_state(state)
}
