//! Top-level router configuration combining page, API and redirect routes.
//!
//! # Route Structure
//!
//! - `GET  /`               - Home page with the shorten form
//! - `POST /shorten`        - Form submission
//! - `GET  /metrics/{code}` - Visit count page
//! - `GET  /r/{code}`       - Short link redirect
//! - `GET  /health`         - Health check: store, visit queue
//! - `/api/*`               - JSON API
//! - `/static/*`            - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// `static_dir` is served under `/static`.
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir))
}

/// All routes and the tracing layer, without path normalization.
pub fn router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .merge(web::routes::routes())
        .route("/r/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer())
}
