//! Key-value store handles shared by the repositories.
//!
//! [`RedisStore`] is the production backend. [`MemoryStore`] keeps the same
//! expiry semantics in-process for local runs and tests.

pub mod error;
pub mod memory_store;
pub mod redis_store;

pub use error::{StoreError, StoreResult};
pub use memory_store::MemoryStore;
pub use redis_store::{RedisStore, StoreOptions};
