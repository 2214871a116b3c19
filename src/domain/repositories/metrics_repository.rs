//! Repository trait for per-code visit counters.

use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for visit counters.
///
/// Counters are keyed by short code and are not tied to the mapping's
/// lifetime. Whether a code is live is the caller's concern.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::RedisMetricsRepository`] - Redis implementation
/// - [`crate::infrastructure::persistence::MemoryMetricsRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetricsRepository: Send + Sync {
    /// Atomically increments the counter for `code`, creating it at zero first
    /// if needed. Returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store failure or timeout.
    async fn increment(&self, code: &str) -> Result<i64, AppError>;

    /// Returns the current count, or `0` if no counter exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store failure or timeout.
    async fn get_count(&self, code: &str) -> Result<i64, AppError>;

    /// Removes the counter for `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store failure or timeout.
    async fn reset(&self, code: &str) -> Result<(), AppError>;
}
