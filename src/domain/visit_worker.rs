//! Background worker that applies queued visits to the metrics store.

use std::sync::Arc;

use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::domain::repositories::MetricsRepository;
use crate::domain::visit_event::VisitEvent;

/// Drains the visit queue until every sender is dropped.
///
/// At most `concurrency` increments are in flight at once. Failed increments
/// are logged and discarded; visits are counted on a best-effort basis.
pub async fn run_visit_worker(
    mut rx: mpsc::Receiver<VisitEvent>,
    metrics_repository: Arc<dyn MetricsRepository>,
    concurrency: usize,
) {
    let permits = Arc::new(Semaphore::new(concurrency.max(1)));
    let mut tasks = JoinSet::new();

    while let Some(event) = rx.recv().await {
        let Ok(permit) = permits.clone().acquire_owned().await else {
            break;
        };
        let metrics_repository = metrics_repository.clone();

        tasks.spawn(async move {
            let _permit = permit;
            match metrics_repository.increment(&event.code).await {
                Ok(count) => debug!(code = %event.code, count, "visit recorded"),
                Err(e) => warn!(code = %event.code, error = %e, "failed to record visit"),
            }
        });

        while tasks.try_join_next().is_some() {}
    }

    while tasks.join_next().await.is_some() {}
    info!("Visit worker stopped");
}
