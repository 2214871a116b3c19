//! Handler for visit metrics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::metrics::MetricsResponse;
use crate::application::services::LinkService;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the visit count of a live short code.
///
/// # Endpoint
///
/// `GET /api/metrics/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or expired.
pub async fn metrics_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<MetricsResponse>, AppError> {
    let metrics = state.stats_service.get_metrics(&code).await?;
    let short_url = LinkService::short_url(&state.site.base_url, &metrics.code);

    Ok(Json(MetricsResponse::from_metrics(metrics, short_url)))
}
