//! Shared Redis connection with per-call timeouts and read retries.

use std::future::Future;
use std::time::Duration;

use redis::{Client, RedisResult, aio::ConnectionManager};
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, warn};

use super::error::{StoreError, StoreResult};
use crate::config::mask_connection_string;

const MAX_RETRY_DELAY: Duration = Duration::from_millis(500);

/// Tuning knobs for every store round trip.
#[derive(Debug, Clone, Copy)]
pub struct StoreOptions {
    /// Upper bound for a single command, connection setup included.
    pub timeout: Duration,
    /// Extra attempts for idempotent reads. Writes are never retried.
    pub read_retries: usize,
    /// Backoff unit. Retry delays are 2x, 4x, 8x... this value, capped at
    /// 500ms, before jitter.
    pub retry_base_ms: u64,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(2000),
            read_retries: 2,
            retry_base_ms: 10,
        }
    }
}

/// Redis handle shared by the link and metrics repositories.
///
/// `ConnectionManager` is cheap to clone and reconnects on its own, so every
/// call works on a fresh clone.
#[derive(Clone)]
pub struct RedisStore {
    manager: ConnectionManager,
    options: StoreOptions,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the server
    /// can't be reached within `options.timeout`, or PING fails.
    pub async fn connect(redis_url: &str, options: StoreOptions) -> StoreResult<Self> {
        info!("Connecting to Redis at {}", mask_connection_string(redis_url));

        let client = Client::open(redis_url)
            .map_err(|e| StoreError::Connection(format!("Failed to create Redis client: {}", e)))?;

        let manager = tokio::time::timeout(options.timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| {
                StoreError::Connection(format!(
                    "Timed out after {}ms connecting to Redis",
                    options.timeout.as_millis()
                ))
            })?
            .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let store = Self { manager, options };
        store
            .execute("PING", ping_command)
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");
        Ok(store)
    }

    /// Runs a single command once, bounded by the configured timeout.
    ///
    /// Used for writes: a retried `INCR` or `SET NX` could apply twice.
    pub async fn execute<T, F, Fut>(&self, operation: &'static str, command: F) -> StoreResult<T>
    where
        F: FnOnce(ConnectionManager) -> Fut,
        Fut: Future<Output = RedisResult<T>>,
    {
        self.run(operation, command(self.manager.clone())).await
    }

    /// Runs an idempotent command, retrying transient failures with
    /// exponential backoff.
    pub async fn execute_idempotent<T, F, Fut>(
        &self,
        operation: &'static str,
        mut command: F,
    ) -> StoreResult<T>
    where
        F: FnMut(ConnectionManager) -> Fut,
        Fut: Future<Output = RedisResult<T>>,
    {
        let strategy = backoff_delays(&self.options).map(jitter);

        let store = self;
        RetryIf::spawn(
            strategy,
            move || store.run(operation, command(store.manager.clone())),
            |e: &StoreError| {
                let retry = e.is_retryable();
                if retry {
                    warn!(operation, error = %e, "Retrying store read");
                }
                retry
            },
        )
        .await
    }

    /// Returns `true` when the server answers PING within the timeout.
    pub async fn ping(&self) -> bool {
        match self.execute("PING", ping_command).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Redis health check failed");
                false
            }
        }
    }

    async fn run<T, Fut>(&self, operation: &'static str, fut: Fut) -> StoreResult<T>
    where
        Fut: Future<Output = RedisResult<T>>,
    {
        match tokio::time::timeout(self.options.timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(source)) => Err(StoreError::Backend { operation, source }),
            Err(_) => {
                let timeout_ms = self.options.timeout.as_millis() as u64;
                debug!(operation, timeout_ms, "Store call timed out");
                Err(StoreError::Timeout {
                    operation,
                    timeout_ms,
                })
            }
        }
    }
}

fn backoff_delays(options: &StoreOptions) -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(2)
        .factor(options.retry_base_ms.max(1))
        .max_delay(MAX_RETRY_DELAY)
        .take(options.read_retries)
}

async fn ping_command(mut conn: ConnectionManager) -> RedisResult<()> {
    redis::cmd("PING").query_async(&mut conn).await
}
