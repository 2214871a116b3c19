//! Domain layer containing entities, repository contracts and visit tracking.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//! - [`visit_event`] - Visit events and the best-effort [`visit_event::VisitRecorder`]
//! - [`visit_worker`] - Background worker applying visits to the metrics store
//!
//! # Visit Processing Flow
//!
//! 1. Redirect handler resolves the code
//! 2. [`visit_event::VisitRecorder::record`] enqueues a [`visit_event::VisitEvent`]
//! 3. [`visit_worker::run_visit_worker`] increments the counter
//! 4. The redirect response never waits on step 3

pub mod entities;
pub mod repositories;
pub mod visit_event;
pub mod visit_worker;
