//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the key-value store behind two narrow contracts:
//!
//! - [`LinkRepository`] - Short code → long URL mappings with TTL
//! - [`MetricsRepository`] - Per-code visit counters
//!
//! Implementations live in `crate::infrastructure::persistence`. Mock
//! implementations are generated via `mockall` for unit tests.

pub mod link_repository;
pub mod metrics_repository;

pub use link_repository::LinkRepository;
pub use metrics_repository::MetricsRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use metrics_repository::MockMetricsRepository;
