//! Debounced commitment of search input.
//!
//! [`SearchDebouncer`] turns a stream of raw keystrokes into a single committed
//! term. Every input cancels the outstanding timer and schedules a new one; only
//! the value present when a timer finally fires is committed. The committed term
//! lives in a `tokio::sync::watch` cell so consumers can read it synchronously or
//! subscribe to changes.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Default quiet period before a term is committed.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Owner of the single pending search timer.
///
/// Dropping the debouncer cancels a pending commit.
#[derive(Debug)]
pub struct SearchDebouncer {
    delay: Duration,
    committed: Arc<watch::Sender<String>>,
    pending: Option<JoinHandle<()>>,
}

impl SearchDebouncer {
    /// Creates a debouncer with an empty committed term.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        let (committed, _) = watch::channel(String::new());
        Self {
            delay,
            committed: Arc::new(committed),
            pending: None,
        }
    }

    /// Records raw input, replacing any not-yet-committed value.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn on_input(&mut self, raw: impl Into<String>) {
        let raw = raw.into();
        if let Some(previous) = self.pending.take() {
            previous.abort();
        }

        tracing::trace!(term = %raw, delay_ms = self.delay.as_millis(), "search input scheduled");

        let committed = Arc::clone(&self.committed);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let changed = committed.send_if_modified(|current| {
                if *current == raw {
                    false
                } else {
                    current.clone_from(&raw);
                    true
                }
            });
            if changed {
                tracing::debug!(term = %raw, "search term committed");
            }
        }));
    }

    /// Returns the currently committed term.
    #[must_use]
    pub fn term(&self) -> String {
        self.committed.borrow().clone()
    }

    /// Subscribes to committed term changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.committed.subscribe()
    }

    /// Returns `true` while an input is waiting to be committed.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Cancels the pending commit, if any. The committed term is kept.
    pub fn dispose(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            tracing::trace!("pending search commit cancelled");
        }
    }
}

impl Default for SearchDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.dispose();
    }
}
