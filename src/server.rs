//! HTTP server initialization and runtime setup.
//!
//! Handles store connections, worker spawning, and Axum server lifecycle.

use crate::application::services::{LinkService, StatsService};
use crate::config::{Config, StoreBackend};
use crate::domain::repositories::{LinkRepository, MetricsRepository};
use crate::domain::visit_event::{VisitEvent, VisitRecorder};
use crate::domain::visit_worker::run_visit_worker;
use crate::infrastructure::persistence::{
    MemoryLinkRepository, MemoryMetricsRepository, RedisLinkRepository, RedisMetricsRepository,
};
use crate::infrastructure::store::{MemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::code_generator::CodeGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// How long queued visits may keep draining after the server stops.
const WORKER_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// The two repositories, backed by one shared store handle.
#[derive(Clone)]
pub struct Repositories {
    pub links: Arc<dyn LinkRepository>,
    pub metrics: Arc<dyn MetricsRepository>,
}

impl Repositories {
    pub fn memory(clock: Arc<dyn Clock>) -> Self {
        let store = Arc::new(MemoryStore::new(clock));
        Self {
            links: Arc::new(MemoryLinkRepository::new(store.clone())),
            metrics: Arc::new(MemoryMetricsRepository::new(store)),
        }
    }

    pub fn redis(store: Arc<RedisStore>, metrics_key_prefix: &str) -> Self {
        Self {
            links: Arc::new(RedisLinkRepository::new(store.clone())),
            metrics: Arc::new(RedisMetricsRepository::new(store, metrics_key_prefix)),
        }
    }
}

/// Connects the configured backend.
///
/// # Errors
///
/// Returns an error if the Redis backend is selected and the connection
/// or its initial PING fails.
pub async fn connect_repositories(config: &Config, clock: Arc<dyn Clock>) -> Result<Repositories> {
    match config.store_backend {
        StoreBackend::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("STORE_BACKEND=redis requires REDIS_URL or REDIS_HOST")?;
            let store = RedisStore::connect(redis_url, config.store_options())
                .await
                .context("Failed to connect to Redis")?;
            Ok(Repositories::redis(
                Arc::new(store),
                &config.metrics_key_prefix,
            ))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store, links are lost on restart");
            Ok(Repositories::memory(clock))
        }
    }
}

/// Wires services and the visit queue around a set of repositories.
///
/// Returns the state plus the queue's receiving end, which belongs to
/// [`run_visit_worker`].
pub fn build_state(
    config: &Config,
    repositories: &Repositories,
    clock: Arc<dyn Clock>,
) -> (AppState, mpsc::Receiver<VisitEvent>) {
    let (visit_recorder, visit_rx) = VisitRecorder::channel(config.visit_queue_capacity);

    let generator = CodeGenerator::new(clock.clone(), config.code_length);
    let link_service = LinkService::new(
        repositories.links.clone(),
        repositories.metrics.clone(),
        generator,
        clock,
    );
    let stats_service = StatsService::new(repositories.links.clone(), repositories.metrics.clone());

    let state = AppState::new(link_service, stats_service, visit_recorder, config.site());
    (state, visit_rx)
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Store backend (Redis or in-memory)
/// - Background visit worker
/// - Axum HTTP server with graceful shutdown
///
/// Once the server stops, the visit queue closes and the worker gets a
/// short grace period to apply what is left.
///
/// # Errors
///
/// Returns an error if:
/// - Store connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let repositories = connect_repositories(&config, clock.clone()).await?;

    let (state, visit_rx) = build_state(&config, &repositories, clock);

    let worker = tokio::spawn(run_visit_worker(
        visit_rx,
        repositories.metrics.clone(),
        config.visit_worker_concurrency,
    ));
    tracing::info!("Visit worker started");

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped, draining visit queue");
    if tokio::time::timeout(WORKER_DRAIN_TIMEOUT, worker).await.is_err() {
        tracing::warn!("Visit worker did not finish draining in time");
    }

    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
