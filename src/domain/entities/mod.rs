//! Core domain entities.
//!
//! - [`Link`] - A short code mapped to a long URL with an expiry
//! - [`LinkRequest`] - Raw input for creating a link
//! - [`LinkMetrics`] - Visit count for a live link

pub mod link;
pub mod metrics;

pub use link::{Link, LinkRequest};
pub use metrics::LinkMetrics;
