//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::application::services::LinkService;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "alias": "my-link",          // optional
///   "expiration_days": 7
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "code": "MzQ1Njc4OQ",
///   "short_url": "https://sho.rt/r/MzQ1Njc4OQ",
///   "metrics_url": "https://sho.rt/metrics/MzQ1Njc4OQ",
///   "long_url": "https://example.com",
///   "expires_at": "2024-01-08T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request: malformed body or validation failed
/// - 409 Conflict: alias already taken
/// - 500 Internal Server Error: store unavailable
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let link = state.link_service.shorten(payload.into()).await?;

    let short_url = LinkService::short_url(&state.site.base_url, &link.code);
    let metrics_url = LinkService::metrics_url(&state.site.base_url, &link.code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse::from_link(link, short_url, metrics_url)),
    ))
}
