//! Environment collaborators: where the page is, and how to move it.
//!
//! The sync controller never looks these up ambiently; callers inject a
//! `Location` and a `Navigator`, which keeps the controller testable without a
//! browser.

mod memory;

pub use memory::MemoryHistory;

use crate::query::NavigationTarget;

/// Current path and query string, captured at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationSnapshot {
    pub path: String,
    pub query: String,
}

impl LocationSnapshot {
    pub fn new(path: impl Into<String>, query: impl Into<String>) -> Self {
        let target = NavigationTarget::new(path, query);
        Self {
            path: target.path().to_string(),
            query: target.query().to_string(),
        }
    }
}

impl From<&NavigationTarget> for LocationSnapshot {
    fn from(target: &NavigationTarget) -> Self {
        Self {
            path: target.path().to_string(),
            query: target.query().to_string(),
        }
    }
}

/// Options passed along with a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Whether the viewport should scroll to the top after navigating.
    pub scroll: bool,
}

impl Default for NavigateOptions {
    fn default() -> Self {
        Self { scroll: true }
    }
}

/// Reads the current page location.
pub trait Location: Send + Sync {
    fn snapshot(&self) -> LocationSnapshot;
}

/// Performs client-side navigation (no full reload).
pub trait Navigator: Send + Sync {
    fn push(&self, target: &NavigationTarget, options: NavigateOptions);
}
