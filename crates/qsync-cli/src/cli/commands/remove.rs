//! `qsync remove <query> <key>...` – drop keys and print the URL.

use qsync_core::config::QsyncConfig;
use qsync_core::{remove_keys_from_url_query, NavigationTarget};

pub fn run_remove(cfg: &QsyncConfig, path: Option<&str>, query: &str, keys: &[String]) {
    let path = path.unwrap_or(cfg.filter.listing_route.as_str());
    let target = NavigationTarget::new(path, remove_keys_from_url_query(query, keys));
    println!("{target}");
}
