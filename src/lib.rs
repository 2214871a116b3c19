//! # tinylink
//!
//! A small URL shortener built with Axum and Redis.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities, repository traits, visit queue
//! - **Application Layer** ([`application`]) - Link creation, resolution and metrics
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - JSON API, redirect and health handlers
//! - **Web Layer** ([`web`]) - Server-rendered pages
//!
//! ## Features
//!
//! - Timestamp-derived short codes or custom aliases
//! - Per-link expiration backed by native Redis key TTLs
//! - Best-effort visit counting off the redirect path
//! - Bounded timeouts and retries on every store call
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379/0"
//! export APP_URI="http://localhost:8080/"
//!
//! cargo run
//! ```
//!
//! Set `STORE_BACKEND=memory` to run without Redis.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, StatsService};
    pub use crate::domain::entities::{Link, LinkMetrics, LinkRequest};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
