//! DTOs for link shortening endpoint.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::application::services::link_service::MAX_EXPIRATION_DAYS;
use crate::domain::entities::{Link, LinkRequest};

/// Compiled regex for alias validation.
static ALIAS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("alias regex is valid"));

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL (HTTP/HTTPS). Format is checked by the service.
    #[validate(length(min = 1, message = "The URL field cannot be empty."))]
    pub url: String,

    /// Optional custom short code.
    #[validate(length(min = 1, max = 64))]
    #[validate(regex(path = "*ALIAS_REGEX", message = "Alias may only contain letters, digits, '-' and '_'"))]
    pub alias: Option<String>,

    /// Lifetime of the mapping in days.
    #[validate(range(min = 1, max = MAX_EXPIRATION_DAYS, message = "Invalid expiration value."))]
    pub expiration_days: i64,
}

impl From<ShortenRequest> for LinkRequest {
    fn from(request: ShortenRequest) -> Self {
        LinkRequest {
            long_url: request.url,
            alias: request.alias,
            expiration_days: Some(request.expiration_days),
        }
    }
}

/// Created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub short_url: String,
    pub metrics_url: String,
    pub long_url: String,
    pub expires_at: DateTime<Utc>,
}

impl ShortenResponse {
    pub fn from_link(link: Link, short_url: String, metrics_url: String) -> Self {
        Self {
            code: link.code,
            short_url,
            metrics_url,
            long_url: link.long_url,
            expires_at: link.expires_at,
        }
    }
}
