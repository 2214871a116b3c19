//! In-process implementation of the link repository.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::store::MemoryStore;

pub struct MemoryLinkRepository {
    store: Arc<MemoryStore>,
}

impl MemoryLinkRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn put(&self, code: &str, long_url: &str, ttl: Duration) -> Result<(), AppError> {
        self.store.set(code, long_url, ttl);
        Ok(())
    }

    async fn put_if_absent(
        &self,
        code: &str,
        long_url: &str,
        ttl: Duration,
    ) -> Result<bool, AppError> {
        Ok(self.store.set_if_absent(code, long_url, ttl))
    }

    async fn get(&self, code: &str) -> Result<String, AppError> {
        self.store
            .get(code)
            .ok_or_else(|| AppError::not_found("Shortened URL not found", json!({ "code": code })))
    }

    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.store.exists(code))
    }

    async fn ping(&self) -> bool {
        true
    }
}
