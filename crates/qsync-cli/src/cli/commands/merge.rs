//! `qsync merge <query> <key> <value>` – set one key and print the URL.

use qsync_core::config::QsyncConfig;
use qsync_core::{form_url_query, NavigationTarget};

pub fn merge_target(
    cfg: &QsyncConfig,
    path: Option<&str>,
    query: &str,
    key: &str,
    value: &str,
) -> NavigationTarget {
    let path = path.unwrap_or(cfg.filter.listing_route.as_str());
    NavigationTarget::new(path, form_url_query(query, key, value))
}

pub fn run_merge(cfg: &QsyncConfig, path: Option<&str>, query: &str, key: &str, value: &str) {
    println!("{}", merge_target(cfg, path, query, key, value));
}
