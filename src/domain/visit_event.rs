//! Visit events and the best-effort recorder used by the redirect path.

use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::warn;

/// A successful redirect through a short code.
#[derive(Debug, Clone)]
pub struct VisitEvent {
    pub code: String,
}

impl VisitEvent {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
        }
    }
}

/// Non-critical side effect: counts visits without ever holding up a redirect.
///
/// [`VisitRecorder::record`] enqueues onto a bounded channel drained by
/// [`crate::domain::visit_worker::run_visit_worker`]. A full or closed queue
/// drops the visit with a warning; the caller is never told.
#[derive(Debug, Clone)]
pub struct VisitRecorder {
    sender: mpsc::Sender<VisitEvent>,
}

impl VisitRecorder {
    pub fn new(sender: mpsc::Sender<VisitEvent>) -> Self {
        Self { sender }
    }

    /// Creates a recorder and the receiving end for the worker.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<VisitEvent>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self::new(tx), rx)
    }

    /// Enqueues a visit for `code`. Never blocks, never fails.
    pub fn record(&self, code: &str) {
        match self.sender.try_send(VisitEvent::new(code)) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                warn!(code = %event.code, "visit queue full, dropping visit");
            }
            Err(TrySendError::Closed(event)) => {
                warn!(code = %event.code, "visit queue closed, dropping visit");
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Remaining free slots in the queue.
    pub fn capacity(&self) -> usize {
        self.sender.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_enqueues_event() {
        let (recorder, mut rx) = VisitRecorder::channel(4);

        recorder.record("abc123");

        let event = rx.try_recv().unwrap();
        assert_eq!(event.code, "abc123");
    }

    #[test]
    fn test_record_drops_when_full() {
        let (recorder, mut rx) = VisitRecorder::channel(1);

        recorder.record("first");
        recorder.record("second");

        assert_eq!(rx.try_recv().unwrap().code, "first");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_record_after_close_does_not_panic() {
        let (recorder, rx) = VisitRecorder::channel(1);
        drop(rx);

        recorder.record("orphan");

        assert!(recorder.is_closed());
    }
}
