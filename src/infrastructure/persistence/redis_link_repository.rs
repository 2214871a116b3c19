//! Redis implementation of the link repository.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, RedisResult};
use serde_json::json;
use tracing::debug;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::store::RedisStore;

/// Stores each mapping as a plain string key (the short code) with a
/// millisecond TTL.
pub struct RedisLinkRepository {
    store: Arc<RedisStore>,
}

impl RedisLinkRepository {
    pub fn new(store: Arc<RedisStore>) -> Self {
        Self { store }
    }
}

pub(crate) fn ttl_millis(ttl: Duration) -> u64 {
    u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1)
}

#[async_trait]
impl LinkRepository for RedisLinkRepository {
    async fn put(&self, code: &str, long_url: &str, ttl: Duration) -> Result<(), AppError> {
        let ttl_ms = ttl_millis(ttl);
        self.store
            .execute("SET", |mut conn| async move {
                conn.pset_ex::<_, _, ()>(code, long_url, ttl_ms).await
            })
            .await?;

        debug!(code, ttl_ms, "Mapping written");
        Ok(())
    }

    async fn put_if_absent(
        &self,
        code: &str,
        long_url: &str,
        ttl: Duration,
    ) -> Result<bool, AppError> {
        let ttl_ms = ttl_millis(ttl);
        let written = self
            .store
            .execute("SET NX", |mut conn| async move {
                let reply: RedisResult<Option<String>> = redis::cmd("SET")
                    .arg(code)
                    .arg(long_url)
                    .arg("NX")
                    .arg("PX")
                    .arg(ttl_ms)
                    .query_async(&mut conn)
                    .await;
                reply.map(|ok| ok.is_some())
            })
            .await?;

        debug!(code, written, "Conditional mapping write");
        Ok(written)
    }

    async fn get(&self, code: &str) -> Result<String, AppError> {
        let value = self
            .store
            .execute_idempotent("GET", |mut conn| async move {
                conn.get::<_, Option<String>>(code).await
            })
            .await?;

        value.ok_or_else(|| AppError::not_found("Shortened URL not found", json!({ "code": code })))
    }

    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        let exists = self
            .store
            .execute_idempotent("EXISTS", |mut conn| async move {
                conn.exists::<_, bool>(code).await
            })
            .await?;
        Ok(exists)
    }

    async fn ping(&self) -> bool {
        self.store.ping().await
    }
}
