//! In-process implementation of the metrics repository.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::repositories::MetricsRepository;
use crate::error::AppError;
use crate::infrastructure::store::MemoryStore;

pub struct MemoryMetricsRepository {
    store: Arc<MemoryStore>,
}

impl MemoryMetricsRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MetricsRepository for MemoryMetricsRepository {
    async fn increment(&self, code: &str) -> Result<i64, AppError> {
        Ok(self.store.incr(code))
    }

    async fn get_count(&self, code: &str) -> Result<i64, AppError> {
        Ok(self.store.counter(code).unwrap_or(0))
    }

    async fn reset(&self, code: &str) -> Result<(), AppError> {
        self.store.delete_counter(code);
        Ok(())
    }
}
