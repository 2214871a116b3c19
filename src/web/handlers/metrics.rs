//! Visit metrics page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::application::services::LinkService;
use crate::state::AppState;

/// Renders `templates/metrics.html`.
#[derive(Template, WebTemplate)]
#[template(path = "metrics.html")]
pub struct MetricsTemplate {
    pub title: String,
    pub short_url: String,
    pub count: i64,
}

/// Shows how often a live short code was followed.
///
/// # Endpoint
///
/// `GET /metrics/{code}`
///
/// # Errors
///
/// Plain-text 404 for unknown or expired codes, 500 when the store fails.
pub async fn metrics_page_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Response {
    match state.stats_service.get_metrics(&code).await {
        Ok(metrics) => MetricsTemplate {
            title: state.site.title.clone(),
            short_url: LinkService::short_url(&state.site.base_url, &metrics.code),
            count: metrics.count,
        }
        .into_response(),
        Err(e) => e.into_plain_response(),
    }
}
