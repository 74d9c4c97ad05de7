pub mod config;
pub mod logging;

pub mod location;
pub mod query;
pub mod sync;

pub use location::{Location, LocationSnapshot, MemoryHistory, NavigateOptions, Navigator};
pub use query::{form_url_query, remove_keys_from_url_query, NavigationTarget};
pub use sync::{plan_sync, QuerySyncController, SkipReason, SyncPlan};
