//! Cancellable single-shot timer.

use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Owns at most one pending delayed action. Scheduling a new action aborts the
/// previous one; dropping the timer aborts whatever is pending.
pub(super) struct DebounceTimer {
    runtime: Handle,
    pending: Option<JoinHandle<()>>,
}

impl DebounceTimer {
    pub(super) fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            pending: None,
        }
    }

    /// Runs `action` after `delay` unless cancelled first. Returns true if an
    /// earlier action was still pending and got cancelled.
    pub(super) fn schedule<F>(&mut self, delay: Duration, action: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        let replaced = self.cancel();
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
        replaced
    }

    /// Aborts the pending action, if any. Returns true if one was still pending.
    pub(super) fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                was_pending
            }
            None => false,
        }
    }

    pub(super) fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for DebounceTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
