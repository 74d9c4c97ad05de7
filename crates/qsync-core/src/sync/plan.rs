//! What to do once the quiet period has elapsed.

use crate::config::FilterConfig;
use crate::location::LocationSnapshot;
use crate::query::{form_url_query, remove_keys_from_url_query, NavigationTarget};

/// Outcome of a sync decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncPlan {
    Navigate(NavigationTarget),
    Skip(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Value is empty but the page is not the listing route; the URL is left alone.
    OffListingRoute,
}

/// Decides the navigation for `value` against the current location.
///
/// - non-empty value: set the filter key, keep every other pair;
/// - empty value on the listing route: drop the filter key;
/// - empty value elsewhere: skip.
pub fn plan_sync(value: &str, snapshot: &LocationSnapshot, filter: &FilterConfig) -> SyncPlan {
    if !filter.is_clear_value(value) {
        let query = form_url_query(&snapshot.query, &filter.key, value);
        return SyncPlan::Navigate(NavigationTarget::new(snapshot.path.clone(), query));
    }

    if snapshot.path == filter.listing_route {
        let query = remove_keys_from_url_query(&snapshot.query, &[filter.key.as_str()]);
        return SyncPlan::Navigate(NavigationTarget::new(snapshot.path.clone(), query));
    }

    SyncPlan::Skip(SkipReason::OffListingRoute)
}
