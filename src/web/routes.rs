//! Browser-facing page routes.

use crate::state::AppState;
use crate::web::handlers::{home_handler, metrics_page_handler, shorten_form_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// # Endpoints
///
/// - `GET  /`                - Home page with the shorten form
/// - `POST /shorten`         - Form submission
/// - `GET  /metrics/{code}`  - Visit count page
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/shorten", post(shorten_form_handler))
        .route("/metrics/{code}", get(metrics_page_handler))
}
