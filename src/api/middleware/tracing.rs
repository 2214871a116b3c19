//! Request spans for every route.
//!
//! Each request gets an `INFO` span carrying the method and path. The span
//! also declares an empty `code` field that the redirect handler fills in,
//! so visit logs can be grouped by short code.

use axum::http::Request;
use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse, MakeSpan, TraceLayer};
use tracing::{Level, Span, field};

/// Builds the `request` span for an incoming request.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestSpan;

impl<B> MakeSpan<B> for RequestSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        tracing::info_span!(
            "request",
            method = %request.method(),
            path = %request.uri().path(),
            code = field::Empty,
        )
    }
}

/// Attaches a short code to the current request span.
pub fn record_code(code: &str) {
    Span::current().record("code", code);
}

/// Trace layer for the whole router.
///
/// 5xx responses are logged at `WARN`. The store error behind them has
/// already been logged at `ERROR` where it was converted.
pub fn layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>, RequestSpan> {
    TraceLayer::new_for_http()
        .make_span_with(RequestSpan)
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::WARN)
                .latency_unit(LatencyUnit::Millis),
        )
}
