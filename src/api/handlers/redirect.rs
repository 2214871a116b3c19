//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::api::middleware::tracing::record_code;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /r/{code}`
///
/// # Request Flow
///
/// 1. Resolve the code against the store (no local cache)
/// 2. Hand a visit to the [`crate::domain::visit_event::VisitRecorder`]
/// 3. Return 307 Temporary Redirect
///
/// A temporary redirect keeps browsers from caching the target, so every
/// visit reaches the service and expired codes stop resolving.
///
/// # Visit Tracking
///
/// Visits are queued for the background worker. A full queue or a failed
/// increment never affects the redirect.
///
/// # Errors
///
/// Plain-text bodies, for browsers:
///
/// - 400 Bad Request: empty code
/// - 404 Not Found: unknown or expired code
/// - 500 Internal Server Error: store unavailable
pub async fn redirect_handler(Path(code): Path<String>, State(state): State<AppState>) -> Response {
    record_code(&code);

    let long_url = match state.link_service.resolve(&code).await {
        Ok(long_url) => long_url,
        Err(e) => return e.into_plain_response(),
    };

    state.visit_recorder.record(&code);
    debug!(code = %code, "Redirecting");

    Redirect::temporary(&long_url).into_response()
}
