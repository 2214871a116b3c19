//! Infrastructure layer for external integrations.
//!
//! This layer implements the repository traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`store`] - Store handles (Redis and in-process) with timeouts and retries
//! - [`persistence`] - Link and metrics repository implementations

pub mod persistence;
pub mod store;
