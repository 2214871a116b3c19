//! Link creation and resolution service.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::{Link, LinkRequest};
use crate::domain::repositories::{LinkRepository, MetricsRepository};
use crate::error::AppError;
use crate::utils::clock::Clock;
use crate::utils::code_generator::{CodeGenerator, validate_alias};
use crate::utils::url_validator::{UrlValidationError, validate_url};
use serde_json::json;
use tracing::{debug, info};

/// Upper bound for the expiration day count.
pub const MAX_EXPIRATION_DAYS: i64 = 3650;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Service for creating and resolving short links.
///
/// Validates input, guards aliases against collisions, generates codes and
/// writes mappings. A code's counter is reset only after this service has
/// won the write for it, so a code reused after expiry starts from zero and a
/// rejected request never touches a live counter.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    metrics_repository: Arc<dyn MetricsRepository>,
    generator: CodeGenerator,
    clock: Arc<dyn Clock>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        metrics_repository: Arc<dyn MetricsRepository>,
        generator: CodeGenerator,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            link_repository,
            metrics_repository,
            generator,
            clock,
        }
    }

    /// Creates a short link.
    ///
    /// Input is checked in order: URL, then expiration, then alias. No store
    /// call and no code generation happen until all three pass.
    ///
    /// # Code Selection
    ///
    /// - With an alias: rejected with [`AppError::AliasTaken`] if the alias is live
    /// - Without: a generated code, retried up to 10 times on collision
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if:
    /// - URL is empty, malformed or not HTTP(S)
    /// - Expiration is missing, not an integer, or outside 1..=3650 days
    /// - Alias contains characters outside `[A-Za-z0-9_-]`
    ///
    /// Returns [`AppError::AliasTaken`] if the alias has a live mapping.
    /// Returns [`AppError::StoreUnavailable`] on store failure.
    pub async fn shorten(&self, request: LinkRequest) -> Result<Link, AppError> {
        let long_url = validate_url(&request.long_url).map_err(|e| match e {
            UrlValidationError::Empty => {
                AppError::invalid_input(e.to_string(), json!({ "field": "url" }))
            }
            other => AppError::invalid_input(
                "Invalid URL.",
                json!({ "field": "url", "reason": other.to_string() }),
            ),
        })?;

        let ttl = expiration_ttl(request.expiration_days)?;

        if let Some(alias) = &request.alias {
            validate_alias(alias)?;
        }

        let code = match request.alias {
            Some(alias) => self.claim_alias(alias, long_url, ttl).await?,
            None => self.claim_generated_code(long_url, ttl).await?,
        };

        let expires_at = self.clock.now() + chrono::Duration::seconds(ttl.as_secs() as i64);

        info!(code = %code, "Short link created");

        Ok(Link::new(code, long_url.to_string(), expires_at))
    }

    /// Resolves a short code to its long URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if `code` is empty.
    /// Returns [`AppError::NotFound`] if no live mapping exists.
    /// Returns [`AppError::StoreUnavailable`] on store failure.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        if code.is_empty() {
            return Err(AppError::invalid_input("Invalid URL", json!({})));
        }

        self.link_repository.get(code).await
    }

    /// Constructs the public short URL for a code.
    pub fn short_url(base_url: &str, code: &str) -> String {
        format!("{}/r/{}", base_url.trim_end_matches('/'), code)
    }

    /// Constructs the public metrics page URL for a code.
    pub fn metrics_url(base_url: &str, code: &str) -> String {
        format!("{}/metrics/{}", base_url.trim_end_matches('/'), code)
    }

    /// Checks that the backing store answers.
    pub async fn health_check(&self) -> bool {
        self.link_repository.ping().await
    }

    async fn claim_alias(
        &self,
        alias: String,
        long_url: &str,
        ttl: Duration,
    ) -> Result<String, AppError> {
        if self.link_repository.exists(&alias).await? {
            return Err(AppError::alias_taken(alias));
        }

        if !self
            .link_repository
            .put_if_absent(&alias, long_url, ttl)
            .await?
        {
            return Err(AppError::alias_taken(alias));
        }

        self.metrics_repository.reset(&alias).await?;

        Ok(alias)
    }

    /// Generates codes until one is free, attempting up to 10 times.
    async fn claim_generated_code(&self, long_url: &str, ttl: Duration) -> Result<String, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for attempt in 1..=MAX_ATTEMPTS {
            let code = self.generator.generate();

            if self.link_repository.exists(&code).await? {
                debug!(code = %code, attempt, "Generated code collides with a live link");
                continue;
            }

            if self
                .link_repository
                .put_if_absent(&code, long_url, ttl)
                .await?
            {
                self.metrics_repository.reset(&code).await?;
                return Ok(code);
            }

            debug!(code = %code, attempt, "Lost the write for a generated code");
        }

        Err(AppError::store_unavailable(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}

/// Converts a day count into a TTL.
///
/// # Errors
///
/// Returns [`AppError::InvalidInput`] unless `days` is in 1..=[`MAX_EXPIRATION_DAYS`].
pub fn expiration_ttl(days: Option<i64>) -> Result<Duration, AppError> {
    match days {
        Some(days) if (1..=MAX_EXPIRATION_DAYS).contains(&days) => {
            Ok(Duration::from_secs(days.unsigned_abs() * SECONDS_PER_DAY))
        }
        _ => Err(AppError::invalid_input(
            "Invalid expiration value.",
            json!({ "field": "expiration", "min": 1, "max": MAX_EXPIRATION_DAYS }),
        )),
    }
}
