//! Visit metrics for a live link.

/// Visit count for a short code together with its target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMetrics {
    pub code: String,
    pub long_url: String,
    pub count: i64,
}
