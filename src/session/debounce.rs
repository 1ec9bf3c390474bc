//! Keyed debounce timers.
//!
//! Scheduling a key (re)starts its timer; the task runs only if the timer
//! elapses without another schedule or a cancel for that key.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::constants::DEFAULT_HOVER_DELAY_MS;

/// A debounced event source with explicit start and cancel.
pub trait Debounce {
    /// Starts or restarts the timer for `key`; `task` runs when it elapses.
    fn schedule<F>(&self, key: &str, task: F)
    where
        F: Future<Output = ()> + Send + 'static;

    /// Cancels the pending timer for `key`. Returns `true` if one was pending.
    fn cancel(&self, key: &str) -> bool;

    /// Cancels every pending timer.
    fn cancel_all(&self);

    /// Number of timers still waiting to fire.
    fn pending(&self) -> usize;
}

struct Timer {
    id: u64,
    token: CancellationToken,
}

/// Tokio-backed [`Debounce`]. Must be used from within a tokio runtime.
pub struct Debouncer {
    delay: Duration,
    next_id: AtomicU64,
    timers: Arc<Mutex<HashMap<String, Timer>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_id: AtomicU64::new(0),
            timers: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns `true` if `key` has a pending timer.
    pub fn is_pending(&self, key: &str) -> bool {
        self.timers.lock().contains_key(key)
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_HOVER_DELAY_MS))
    }
}

impl Debounce for Debouncer {
    fn schedule<F>(&self, key: &str, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let token = CancellationToken::new();

        let previous = self.timers.lock().insert(
            key.to_string(),
            Timer {
                id,
                token: token.clone(),
            },
        );
        if let Some(previous) = previous {
            previous.token.cancel();
        }

        let delay = self.delay;
        let timers = Arc::clone(&self.timers);
        let key = key.to_string();

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    trace!(key = %key, "Debounce timer cancelled");
                    return;
                }
                _ = tokio::time::sleep(delay) => {}
            }

            {
                let mut timers = timers.lock();
                if timers.get(&key).is_some_and(|timer| timer.id == id) {
                    timers.remove(&key);
                }
            }

            trace!(key = %key, "Debounce timer fired");
            task.await;
        });
    }

    fn cancel(&self, key: &str) -> bool {
        match self.timers.lock().remove(key) {
            Some(timer) => {
                timer.token.cancel();
                true
            }
            None => false,
        }
    }

    fn cancel_all(&self) {
        for (_, timer) in self.timers.lock().drain() {
            timer.token.cancel();
        }
    }

    fn pending(&self) -> usize {
        self.timers.lock().len()
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

impl std::fmt::Debug for Debouncer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.pending())
            .finish()
    }
}
