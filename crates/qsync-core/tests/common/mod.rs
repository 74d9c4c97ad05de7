//! Shared fixture: a controller wired to an in-memory history.

use std::sync::Arc;
use std::time::Duration;

use qsync_core::config::QsyncConfig;
use qsync_core::{MemoryHistory, QuerySyncController};

pub const QUIET: Duration = Duration::from_millis(500);

pub fn controller_at(href: &str) -> (QuerySyncController, Arc<MemoryHistory>) {
    controller_with(href, QsyncConfig::default())
}

pub fn controller_with(
    href: &str,
    config: QsyncConfig,
) -> (QuerySyncController, Arc<MemoryHistory>) {
    let history = Arc::new(MemoryHistory::from_href(href));
    let controller = QuerySyncController::new(&config, history.clone(), history.clone());
    (controller, history)
}

pub fn hrefs(history: &MemoryHistory) -> Vec<String> {
    history.entries().iter().map(|(t, _)| t.href()).collect()
}

/// Sleeps past one quiet period (virtual time).
pub async fn settle() {
    tokio::time::sleep(QUIET + Duration::from_millis(10)).await;
}
