//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::models::AppConfig;

/// Largest accepted upload; generous for illustration scans.
const MAX_IMAGE_BYTES: usize = 16 * 1024 * 1024;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

/// Create application state from a configuration.
pub fn create_app_state(config: Arc<AppConfig>) -> AppState {
    AppState { config }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Palette and hair-color endpoints
        .route("/api/palette/generate", get(api::handle_generate_palette))
        .route("/api/hair/extract", post(api::handle_extract))
        .route("/api/hair/presets", get(api::handle_presets))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_IMAGE_BYTES))
}
