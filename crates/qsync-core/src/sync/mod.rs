//! Query sync controller.
//!
//! Keeps a filter value in sync with the page URL. Every `set_filter_value`
//! restarts a quiet-period timer; once it elapses uninterrupted the current
//! location is read, the query is rebuilt (see [`plan_sync`]) and the
//! navigator is asked to go there without scrolling.
//!
//! Each scheduled action carries the generation it was scheduled for. The
//! generation check and the navigation happen under the same lock that
//! `set_filter_value` and `dispose` take, so a superseded or disposed action
//! can never navigate even if its task was already past the sleep.

mod plan;
mod timer;

pub use plan::{plan_sync, SkipReason, SyncPlan};

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::config::{FilterConfig, QsyncConfig};
use crate::location::{Location, NavigateOptions, Navigator};
use timer::DebounceTimer;

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    value: String,
    disposed: bool,
}

struct Shared {
    slot: Mutex<Slot>,
    filter: FilterConfig,
    location: Arc<dyn Location>,
    navigator: Arc<dyn Navigator>,
}

impl Shared {
    fn lock_slot(&self) -> MutexGuard<'_, Slot> {
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Timer callback for the action scheduled at `generation`.
    fn fire(&self, generation: u64) {
        let slot = self.lock_slot();
        if slot.disposed || slot.generation != generation {
            tracing::trace!(generation, current = slot.generation, "stale sync dropped");
            return;
        }

        let snapshot = self.location.snapshot();
        match plan_sync(&slot.value, &snapshot, &self.filter) {
            SyncPlan::Navigate(target) => {
                tracing::debug!(
                    key = %self.filter.key,
                    value = %slot.value,
                    target = %target,
                    "syncing filter to url"
                );
                self.navigator
                    .push(&target, NavigateOptions { scroll: false });
            }
            SyncPlan::Skip(reason) => {
                tracing::debug!(path = %snapshot.path, ?reason, "filter sync skipped");
            }
        }
    }
}

/// Debounced filter-to-URL synchronizer.
///
/// Dropping the controller cancels any pending sync.
pub struct QuerySyncController {
    shared: Arc<Shared>,
    timer: DebounceTimer,
    debounce: Duration,
}

impl QuerySyncController {
    /// Creates a controller that schedules its timer on the current Tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn new(
        config: &QsyncConfig,
        location: Arc<dyn Location>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self::with_runtime(config, location, navigator, tokio::runtime::Handle::current())
    }

    pub fn with_runtime(
        config: &QsyncConfig,
        location: Arc<dyn Location>,
        navigator: Arc<dyn Navigator>,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                slot: Mutex::new(Slot::default()),
                filter: config.filter.clone(),
                location,
                navigator,
            }),
            timer: DebounceTimer::new(runtime),
            debounce: config.debounce(),
        }
    }

    /// Records a new filter value and restarts the quiet period.
    ///
    /// Ignored after [`dispose`](Self::dispose).
    pub fn set_filter_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        let generation = {
            let mut slot = self.shared.lock_slot();
            if slot.disposed {
                tracing::debug!(%value, "filter value ignored after dispose");
                return;
            }
            slot.generation += 1;
            slot.value = value;
            slot.generation
        };

        let shared = Arc::clone(&self.shared);
        let replaced = self
            .timer
            .schedule(self.debounce, move || shared.fire(generation));
        tracing::trace!(generation, replaced, "filter sync scheduled");
    }

    /// Last value passed to `set_filter_value`.
    pub fn value(&self) -> String {
        self.shared.lock_slot().value.clone()
    }

    /// True while a sync is scheduled and has not yet run.
    pub fn pending(&self) -> bool {
        self.timer.is_pending()
    }

    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Cancels any pending sync. No navigation happens from this controller afterwards.
    pub fn dispose(&mut self) {
        {
            let mut slot = self.shared.lock_slot();
            if slot.disposed {
                return;
            }
            slot.disposed = true;
            slot.generation += 1;
        }
        let cancelled = self.timer.cancel();
        tracing::debug!(cancelled, "query sync controller disposed");
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.lock_slot().disposed
    }
}

impl Drop for QuerySyncController {
    fn drop(&mut self) {
        self.dispose();
    }
}
