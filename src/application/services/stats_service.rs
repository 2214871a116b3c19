//! Visit metrics service.

use std::sync::Arc;

use crate::domain::entities::LinkMetrics;
use crate::domain::repositories::{LinkRepository, MetricsRepository};
use crate::error::AppError;
use serde_json::json;

/// Service for reading visit counts.
///
/// A counter on its own can't tell "never visited" from "never existed", so
/// every lookup confirms the mapping is live before reading the counter.
pub struct StatsService {
    link_repository: Arc<dyn LinkRepository>,
    metrics_repository: Arc<dyn MetricsRepository>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        metrics_repository: Arc<dyn MetricsRepository>,
    ) -> Self {
        Self {
            link_repository,
            metrics_repository,
        }
    }

    /// Returns the visit count for a live short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if `code` is empty.
    /// Returns [`AppError::NotFound`] if the code has no live mapping.
    /// Returns [`AppError::StoreUnavailable`] on store failure.
    pub async fn get_metrics(&self, code: &str) -> Result<LinkMetrics, AppError> {
        if code.is_empty() {
            return Err(AppError::invalid_input("Invalid URL", json!({})));
        }

        let long_url = self.link_repository.get(code).await?;
        let count = self.metrics_repository.get_count(code).await?;

        Ok(LinkMetrics {
            code: code.to_string(),
            long_url,
            count,
        })
    }
}
