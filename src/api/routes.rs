//! API route configuration.

use crate::api::handlers::{metrics_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// JSON API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`         - Create a short link
/// - `GET  /metrics/{code}`  - Visit count for a live code
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/metrics/{code}", get(metrics_handler))
}
