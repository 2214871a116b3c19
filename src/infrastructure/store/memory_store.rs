//! In-process store used for local runs and tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::utils::clock::Clock;

struct Entry {
    value: String,
    expires_at: Option<DateTime<Utc>>,
}

#[derive(Default)]
struct State {
    entries: HashMap<String, Entry>,
    counters: HashMap<String, i64>,
}

/// Expiring string map plus a counter map, driven by an injectable clock.
///
/// Expired entries are dropped lazily on access, the same way Redis treats
/// them from a client's point of view. Counters never expire.
pub struct MemoryStore {
    state: Mutex<State>,
    clock: Arc<dyn Clock>,
}

impl MemoryStore {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(State::default()),
            clock,
        }
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn deadline(&self, ttl: Duration) -> Option<DateTime<Utc>> {
        chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|ttl| self.clock.now().checked_add_signed(ttl))
    }

    /// Drops `key` if it has expired and reports whether it is still live.
    fn purge_expired(&self, state: &mut State, key: &str) -> bool {
        let now = self.clock.now();
        let expired = match state.entries.get(key) {
            Some(entry) => entry.expires_at.is_some_and(|at| at <= now),
            None => return false,
        };
        if expired {
            state.entries.remove(key);
        }
        !expired
    }

    /// Stores `value` under `key`, replacing any previous entry.
    pub fn set(&self, key: &str, value: &str, ttl: Duration) {
        let expires_at = self.deadline(ttl);
        self.lock().entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
    }

    /// Stores `value` only when no live entry exists. Returns whether it was written.
    pub fn set_if_absent(&self, key: &str, value: &str, ttl: Duration) -> bool {
        let expires_at = self.deadline(ttl);
        let mut state = self.lock();
        if self.purge_expired(&mut state, key) {
            return false;
        }
        state.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
        true
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let mut state = self.lock();
        if !self.purge_expired(&mut state, key) {
            return None;
        }
        state.entries.get(key).map(|entry| entry.value.clone())
    }

    pub fn exists(&self, key: &str) -> bool {
        let mut state = self.lock();
        self.purge_expired(&mut state, key)
    }

    /// Adds one to the counter, creating it at zero first.
    pub fn incr(&self, key: &str) -> i64 {
        let mut state = self.lock();
        let counter = state.counters.entry(key.to_string()).or_insert(0);
        *counter += 1;
        *counter
    }

    pub fn counter(&self, key: &str) -> Option<i64> {
        self.lock().counters.get(key).copied()
    }

    pub fn delete_counter(&self, key: &str) {
        self.lock().counters.remove(key);
    }
}
