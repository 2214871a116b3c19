#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tinylink::AppError;
use tinylink::application::services::{LinkService, StatsService};
use tinylink::config::SiteConfig;
use tinylink::domain::repositories::{LinkRepository, MetricsRepository};
use tinylink::domain::visit_event::{VisitEvent, VisitRecorder};
use tinylink::server::Repositories;
use tinylink::state::AppState;
use tinylink::utils::clock::{ManualClock, SystemClock};
use tinylink::utils::code_generator::CodeGenerator;

pub const BASE_URL: &str = "http://sho.rt/";
pub const TITLE: &str = "Test Shortener";

pub struct TestContext {
    pub state: AppState,
    pub rx: mpsc::Receiver<VisitEvent>,
    pub clock: Arc<ManualClock>,
    pub repositories: Repositories,
}

/// In-memory state. Store expiry follows `clock`; generated codes use the
/// wall clock so consecutive codes differ.
pub fn create_test_state() -> TestContext {
    let clock = start_clock();
    let repositories = Repositories::memory(clock.clone());
    create_state_with(repositories, clock)
}

/// State whose every store call fails as if Redis were down.
pub fn create_unreachable_state() -> TestContext {
    let repositories = Repositories {
        links: Arc::new(UnreachableStore),
        metrics: Arc::new(UnreachableStore),
    };
    create_state_with(repositories, start_clock())
}

pub fn start_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
    ))
}

pub fn create_state_with(repositories: Repositories, clock: Arc<ManualClock>) -> TestContext {
    let (visit_recorder, rx) = VisitRecorder::channel(100);

    let link_service = LinkService::new(
        repositories.links.clone(),
        repositories.metrics.clone(),
        CodeGenerator::new(Arc::new(SystemClock), 10),
        clock.clone(),
    );
    let stats_service = StatsService::new(repositories.links.clone(), repositories.metrics.clone());

    let state = AppState::new(
        link_service,
        stats_service,
        visit_recorder,
        SiteConfig {
            base_url: BASE_URL.to_string(),
            title: TITLE.to_string(),
        },
    );

    TestContext {
        state,
        rx,
        clock,
        repositories,
    }
}

fn unreachable(operation: &str) -> AppError {
    AppError::store_unavailable("Store unavailable", json!({ "operation": operation }))
}

/// Mapping and counter store that fails every call.
pub struct UnreachableStore;

#[async_trait]
impl LinkRepository for UnreachableStore {
    async fn put(&self, _code: &str, _long_url: &str, _ttl: Duration) -> Result<(), AppError> {
        Err(unreachable("SET"))
    }

    async fn put_if_absent(
        &self,
        _code: &str,
        _long_url: &str,
        _ttl: Duration,
    ) -> Result<bool, AppError> {
        Err(unreachable("SET NX"))
    }

    async fn get(&self, _code: &str) -> Result<String, AppError> {
        Err(unreachable("GET"))
    }

    async fn exists(&self, _code: &str) -> Result<bool, AppError> {
        Err(unreachable("EXISTS"))
    }

    async fn ping(&self) -> bool {
        false
    }
}

#[async_trait]
impl MetricsRepository for UnreachableStore {
    async fn increment(&self, _code: &str) -> Result<i64, AppError> {
        Err(unreachable("INCR"))
    }

    async fn get_count(&self, _code: &str) -> Result<i64, AppError> {
        Err(unreachable("GET"))
    }

    async fn reset(&self, _code: &str) -> Result<(), AppError> {
        Err(unreachable("DEL"))
    }
}

/// Link store that answers `exists` with `false` even for live codes, the
/// way a concurrent writer looks between the check and the write.
pub struct StaleExistsLinks {
    pub inner: Arc<dyn LinkRepository>,
}

#[async_trait]
impl LinkRepository for StaleExistsLinks {
    async fn put(&self, code: &str, long_url: &str, ttl: Duration) -> Result<(), AppError> {
        self.inner.put(code, long_url, ttl).await
    }

    async fn put_if_absent(
        &self,
        code: &str,
        long_url: &str,
        ttl: Duration,
    ) -> Result<bool, AppError> {
        self.inner.put_if_absent(code, long_url, ttl).await
    }

    async fn get(&self, code: &str) -> Result<String, AppError> {
        self.inner.get(code).await
    }

    async fn exists(&self, _code: &str) -> Result<bool, AppError> {
        Ok(false)
    }

    async fn ping(&self) -> bool {
        self.inner.ping().await
    }
}

pub async fn create_test_link(repositories: &Repositories, code: &str, url: &str, days: u64) {
    repositories
        .links
        .put(code, url, Duration::from_secs(days * 24 * 60 * 60))
        .await
        .unwrap();
}

/// Applies every queued visit to the metrics store.
pub async fn drain_visits(ctx: &mut TestContext) -> usize {
    let mut applied = 0;
    while let Ok(event) = ctx.rx.try_recv() {
        ctx.repositories.metrics.increment(&event.code).await.unwrap();
        applied += 1;
    }
    applied
}
