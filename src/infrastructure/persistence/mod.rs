//! Repository implementations over the key-value store.
//!
//! # Implementations
//!
//! - [`RedisLinkRepository`] / [`RedisMetricsRepository`] - Production, Redis-backed
//! - [`MemoryLinkRepository`] / [`MemoryMetricsRepository`] - In-process, for local runs and tests
//!
//! All four are constructed with an `Arc` of a shared store handle, so the
//! link and metrics repositories of one backend share a connection.

pub mod memory_link_repository;
pub mod memory_metrics_repository;
pub mod redis_link_repository;
pub mod redis_metrics_repository;

pub use memory_link_repository::MemoryLinkRepository;
pub use memory_metrics_repository::MemoryMetricsRepository;
pub use redis_link_repository::RedisLinkRepository;
pub use redis_metrics_repository::{DEFAULT_KEY_PREFIX, RedisMetricsRepository};
