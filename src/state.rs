//! Shared state handed to every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};
use crate::config::SiteConfig;
use crate::domain::visit_event::VisitRecorder;

/// Application state shared across all request handlers.
///
/// Cloned per request; every field is a cheap handle.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub stats_service: Arc<StatsService>,
    pub visit_recorder: VisitRecorder,
    pub site: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(
        link_service: LinkService,
        stats_service: StatsService,
        visit_recorder: VisitRecorder,
        site: SiteConfig,
    ) -> Self {
        Self {
            link_service: Arc::new(link_service),
            stats_service: Arc::new(stats_service),
            visit_recorder,
            site: Arc::new(site),
        }
    }
}
