//! DTOs for the visit metrics endpoint.

use serde::Serialize;

use crate::domain::entities::LinkMetrics;

/// Visit count for a live short code.
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    pub code: String,
    pub long_url: String,
    pub short_url: String,
    pub count: i64,
}

impl MetricsResponse {
    pub fn from_metrics(metrics: LinkMetrics, short_url: String) -> Self {
        Self {
            code: metrics.code,
            long_url: metrics.long_url,
            short_url,
            count: metrics.count,
        }
    }
}
