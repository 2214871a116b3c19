//! Repository trait for short code mappings.

use std::time::Duration;

use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for short code → long URL mappings.
///
/// Entries expire on their own once their TTL elapses; there is no delete
/// operation. Every call goes to the backing store, there is no local cache.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::RedisLinkRepository`] - Redis implementation
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Writes or overwrites the mapping for `code`, expiring after `ttl`.
    ///
    /// `ttl` must be positive; callers validate the day count beforehand.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store failure or timeout.
    async fn put(&self, code: &str, long_url: &str, ttl: Duration) -> Result<(), AppError>;

    /// Writes the mapping only if `code` has no live mapping.
    ///
    /// Returns `Ok(false)` when the code was already taken.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store failure or timeout.
    async fn put_if_absent(
        &self,
        code: &str,
        long_url: &str,
        ttl: Duration,
    ) -> Result<bool, AppError>;

    /// Returns the long URL for a live mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never written or has expired.
    /// Returns [`AppError::StoreUnavailable`] on store failure or timeout.
    async fn get(&self, code: &str) -> Result<String, AppError>;

    /// Checks whether `code` currently has a live mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on store failure or timeout.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Checks that the backing store answers.
    async fn ping(&self) -> bool;
}
