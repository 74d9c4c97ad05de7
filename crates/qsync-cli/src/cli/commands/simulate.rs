//! `qsync simulate <value>...` – drive a controller over an in-memory history.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use qsync_core::config::QsyncConfig;
use qsync_core::{MemoryHistory, NavigationTarget, QuerySyncController};

use super::subjects::ALL_OPTION;

/// Extra wait past the quiet period so the last sync has run.
const SETTLE_MARGIN: Duration = Duration::from_millis(50);

/// Feeds `values` `gap` apart, waits out the quiet period and returns every
/// navigation the controller made.
pub async fn simulate(
    cfg: &QsyncConfig,
    start: NavigationTarget,
    values: &[String],
    gap: Duration,
) -> Vec<NavigationTarget> {
    let history = Arc::new(MemoryHistory::new(start.path(), start.query()));
    let mut controller = QuerySyncController::new(cfg, history.clone(), history.clone());

    for (i, value) in values.iter().enumerate() {
        if i > 0 && !gap.is_zero() {
            tokio::time::sleep(gap).await;
        }
        if !cfg.filter.is_clear_value(value)
            && value != ALL_OPTION
            && !cfg.filter.is_known_subject(value)
        {
            tracing::warn!(%value, "value is not one of the configured subjects");
        }
        controller.set_filter_value(value.as_str());
    }

    tokio::time::sleep(controller.debounce() + SETTLE_MARGIN).await;
    controller.dispose();

    history.entries().into_iter().map(|(t, _)| t).collect()
}

pub async fn run_simulate(
    cfg: &QsyncConfig,
    path: Option<&str>,
    query: &str,
    values: &[String],
    gap_ms: u64,
) -> Result<()> {
    let path = path.unwrap_or(cfg.filter.listing_route.as_str());
    let start = NavigationTarget::new(path, query);
    println!("start: {start}");

    let pushed = simulate(cfg, start, values, Duration::from_millis(gap_ms)).await;
    if pushed.is_empty() {
        println!("no navigation");
    } else {
        for target in pushed {
            println!("push: {target}");
        }
    }
    Ok(())
}
