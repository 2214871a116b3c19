//! Link entity representing a short code mapping.

use chrono::{DateTime, Utc};

/// A live mapping from a short code to a long URL.
///
/// `expires_at` is computed when the mapping is written; the store drops the
/// key on its own once that instant passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub long_url: String,
    pub expires_at: DateTime<Utc>,
}

impl Link {
    pub fn new(code: String, long_url: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            code,
            long_url,
            expires_at,
        }
    }
}

/// Unvalidated input for creating a link, as received from a form or the API.
///
/// `expiration_days` is `None` when the submitted value was missing or not
/// an integer; validation happens in
/// [`crate::application::services::LinkService::shorten`].
#[derive(Debug, Clone, Default)]
pub struct LinkRequest {
    pub long_url: String,
    pub alias: Option<String>,
    pub expiration_days: Option<i64>,
}

impl LinkRequest {
    /// Builds a request from raw form fields.
    ///
    /// A blank alias means "generate a code".
    pub fn from_form(long_url: &str, alias: &str, expiration: &str) -> Self {
        let alias = alias.trim();

        Self {
            long_url: long_url.to_string(),
            alias: (!alias.is_empty()).then(|| alias.to_string()),
            expiration_days: expiration.trim().parse().ok(),
        }
    }
}
