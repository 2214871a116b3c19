//! Short code generation and alias validation.
//!
//! Generated codes are derived from the current nanosecond timestamp: the
//! decimal digits are base64-encoded with the URL-safe alphabet and the
//! fastest-changing tail of the encoding is kept. No randomness, no shared
//! state, no locking.

use std::sync::Arc;

use crate::error::AppError;
use crate::utils::clock::Clock;
use base64::Engine as _;
use serde_json::json;

/// Default number of characters in a generated code.
pub const DEFAULT_CODE_LENGTH: usize = 10;

/// Bounds accepted for `CODE_LENGTH`.
///
/// A 19-digit nanosecond timestamp encodes to 26 characters, so longer codes
/// would only repeat the slowly-changing prefix.
pub const MIN_CODE_LENGTH: usize = 4;
pub const MAX_CODE_LENGTH: usize = 26;

/// Maximum length of a caller-supplied alias.
const MAX_ALIAS_LENGTH: usize = 64;

/// Produces short codes from an injected clock.
#[derive(Clone)]
pub struct CodeGenerator {
    clock: Arc<dyn Clock>,
    length: usize,
}

impl CodeGenerator {
    /// Creates a generator; `length` is clamped to
    /// [`MIN_CODE_LENGTH`]..=[`MAX_CODE_LENGTH`].
    pub fn new(clock: Arc<dyn Clock>, length: usize) -> Self {
        Self {
            clock,
            length: length.clamp(MIN_CODE_LENGTH, MAX_CODE_LENGTH),
        }
    }

    /// Generates a code for the clock's current instant.
    ///
    /// Deterministic for a fixed clock. Two instants at least one nanosecond
    /// apart yield different codes unless their timestamps agree in every
    /// digit covered by the kept tail.
    pub fn generate(&self) -> String {
        let now = self.clock.now();
        let nanos = i128::from(now.timestamp()) * 1_000_000_000
            + i128::from(now.timestamp_subsec_nanos());

        let encoded =
            base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(nanos.to_string().as_bytes());

        let start = encoded.len().saturating_sub(self.length);
        encoded[start..].to_string()
    }
}

/// Validates a caller-supplied alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
///
/// # Errors
///
/// Returns [`AppError::InvalidInput`] if any rule is violated.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() || alias.len() > MAX_ALIAS_LENGTH {
        return Err(AppError::invalid_input(
            "Alias must be 1-64 characters.",
            json!({ "provided_length": alias.len() }),
        ));
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::invalid_input(
            "Alias can only contain letters, digits, hyphens and underscores.",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::clock::{ManualClock, SystemClock};
    use chrono::{DateTime, Duration};
    use std::collections::HashSet;

    fn fixed_generator(length: usize) -> (Arc<ManualClock>, CodeGenerator) {
        let start = DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap();
        let clock = Arc::new(ManualClock::new(start));
        let generator = CodeGenerator::new(clock.clone(), length);
        (clock, generator)
    }

    #[test]
    fn test_generate_is_deterministic_for_fixed_clock() {
        let (_clock, generator) = fixed_generator(DEFAULT_CODE_LENGTH);

        assert_eq!(generator.generate(), "MzQ1Njc4OQ");
        assert_eq!(generator.generate(), generator.generate());
    }

    #[test]
    fn test_generate_has_configured_length() {
        let (_clock, generator) = fixed_generator(6);
        assert_eq!(generator.generate(), "Njc4OQ");
    }

    #[test]
    fn test_generate_differs_one_nanosecond_apart() {
        let (clock, generator) = fixed_generator(DEFAULT_CODE_LENGTH);
        let first = generator.generate();

        clock.advance(Duration::nanoseconds(1));
        let second = generator.generate();

        assert_ne!(first, second);
        assert_eq!(second, "MzQ1Njc5MA");
    }

    #[test]
    fn test_generate_distinct_across_many_instants() {
        let (clock, generator) = fixed_generator(DEFAULT_CODE_LENGTH);
        let mut codes = HashSet::new();

        for _ in 0..1000 {
            codes.insert(generator.generate());
            clock.advance(Duration::nanoseconds(137));
        }

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generate_url_safe_characters() {
        let generator = CodeGenerator::new(Arc::new(SystemClock), DEFAULT_CODE_LENGTH);
        let code = generator.generate();

        assert_eq!(code.len(), DEFAULT_CODE_LENGTH);
        assert!(
            code.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
        assert!(!code.contains('='));
    }

    #[test]
    fn test_length_is_clamped() {
        let (_clock, short) = fixed_generator(1);
        assert_eq!(short.generate().len(), MIN_CODE_LENGTH);

        let (_clock, long) = fixed_generator(100);
        assert_eq!(long.generate(), "MTcwMDAwMDAwMDEyMzQ1Njc4OQ");
    }

    #[test]
    fn test_validate_alias_accepts_url_safe() {
        assert!(validate_alias("abc").is_ok());
        assert!(validate_alias("My_Link-2024").is_ok());
        assert!(validate_alias("x").is_ok());
    }

    #[test]
    fn test_validate_alias_rejects_empty() {
        let err = validate_alias("").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput { .. }));
    }

    #[test]
    fn test_validate_alias_rejects_too_long() {
        let alias = "a".repeat(65);
        assert!(validate_alias(&alias).is_err());
        assert!(validate_alias(&"a".repeat(64)).is_ok());
    }

    #[test]
    fn test_validate_alias_rejects_unsafe_characters() {
        for alias in ["my link", "a/b", "metrics:abc", "q?x", "émoji"] {
            assert!(validate_alias(alias).is_err(), "{alias} should be rejected");
        }
    }
}
