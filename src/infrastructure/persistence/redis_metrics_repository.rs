//! Redis implementation of the metrics repository.

use std::sync::Arc;

use async_trait::async_trait;
use redis::AsyncCommands;

use crate::domain::repositories::MetricsRepository;
use crate::error::AppError;
use crate::infrastructure::store::RedisStore;

/// Default namespace for counter keys, kept apart from mapping keys.
pub const DEFAULT_KEY_PREFIX: &str = "metrics:";

/// Visit counters stored as `INCR`-able integers under `{prefix}{code}`.
pub struct RedisMetricsRepository {
    store: Arc<RedisStore>,
    key_prefix: String,
}

impl RedisMetricsRepository {
    pub fn new(store: Arc<RedisStore>, key_prefix: impl Into<String>) -> Self {
        Self {
            store,
            key_prefix: key_prefix.into(),
        }
    }

    fn build_key(&self, code: &str) -> String {
        format!("{}{}", self.key_prefix, code)
    }
}

#[async_trait]
impl MetricsRepository for RedisMetricsRepository {
    async fn increment(&self, code: &str) -> Result<i64, AppError> {
        let key = self.build_key(code);
        let count = self
            .store
            .execute("INCR", |mut conn| async move {
                conn.incr::<_, _, i64>(key, 1).await
            })
            .await?;
        Ok(count)
    }

    async fn get_count(&self, code: &str) -> Result<i64, AppError> {
        let key = self.build_key(code);
        let key = key.as_str();
        let count = self
            .store
            .execute_idempotent("GET", |mut conn| async move {
                conn.get::<_, Option<i64>>(key).await
            })
            .await?;
        Ok(count.unwrap_or(0))
    }

    async fn reset(&self, code: &str) -> Result<(), AppError> {
        let key = self.build_key(code);
        self.store
            .execute("DEL", |mut conn| async move { conn.del::<_, ()>(key).await })
            .await?;
        Ok(())
    }
}
