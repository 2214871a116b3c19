//! Long URL validation.
//!
//! URLs are checked but stored exactly as submitted (minus surrounding
//! whitespace), so resolving a code yields the same string the user entered.

use url::Url;

/// Errors that can occur during URL validation.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("The URL field cannot be empty.")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Validates a long URL and returns its trimmed form.
///
/// Rejects potentially dangerous schemes like `javascript:`, `data:` or `file:`.
///
/// # Errors
///
/// - [`UrlValidationError::Empty`] for empty or whitespace-only input
/// - [`UrlValidationError::InvalidFormat`] for malformed URLs
/// - [`UrlValidationError::UnsupportedProtocol`] for non-HTTP(S) schemes
/// - [`UrlValidationError::MissingHost`] when no host is present
pub fn validate_url(input: &str) -> Result<&str, UrlValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url = Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlValidationError::MissingHost);
    }

    Ok(trimmed)
}
