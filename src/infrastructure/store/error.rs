//! Store error type.

use crate::error::AppError;
use redis::RedisError;
use serde_json::json;
use tracing::error;

/// Errors raised by the key-value store client.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store connection error: {0}")]
    Connection(String),

    #[error("Store operation {operation} timed out after {timeout_ms}ms")]
    Timeout {
        operation: &'static str,
        timeout_ms: u64,
    },

    #[error("Store operation {operation} failed: {source}")]
    Backend {
        operation: &'static str,
        #[source]
        source: RedisError,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// Whether repeating the same idempotent command might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            StoreError::Connection(_) | StoreError::Timeout { .. } => true,
            StoreError::Backend { source, .. } => {
                source.is_io_error()
                    || source.is_connection_dropped()
                    || source.is_connection_refusal()
                    || source.is_timeout()
            }
        }
    }

    pub fn operation(&self) -> Option<&'static str> {
        match self {
            StoreError::Connection(_) => None,
            StoreError::Timeout { operation, .. } | StoreError::Backend { operation, .. } => {
                Some(operation)
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        error!(error = %e, "Store operation failed");
        AppError::store_unavailable(
            "Store unavailable",
            json!({ "operation": e.operation() }),
        )
    }
}
