//! In-memory history: a `Location` and `Navigator` backed by a `Vec`.

use std::sync::{Mutex, MutexGuard};

use super::{Location, LocationSnapshot, NavigateOptions, Navigator};
use crate::query::NavigationTarget;

#[derive(Debug)]
struct HistoryState {
    current: NavigationTarget,
    pushed: Vec<(NavigationTarget, NavigateOptions)>,
}

/// Browser-like history kept in memory.
///
/// `push` records the entry and makes it the current location, so a later
/// snapshot sees the query the previous navigation produced.
#[derive(Debug)]
pub struct MemoryHistory {
    state: Mutex<HistoryState>,
}

impl MemoryHistory {
    pub fn new(path: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(HistoryState {
                current: NavigationTarget::new(path, query),
                pushed: Vec::new(),
            }),
        }
    }

    /// Starts at `href` (e.g. `/companions?page=2`).
    pub fn from_href(href: &str) -> Self {
        let target = NavigationTarget::parse(href);
        Self::new(target.path(), target.query())
    }

    fn lock(&self) -> MutexGuard<'_, HistoryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn current(&self) -> NavigationTarget {
        self.lock().current.clone()
    }

    /// Every entry pushed so far, oldest first.
    pub fn entries(&self) -> Vec<(NavigationTarget, NavigateOptions)> {
        self.lock().pushed.clone()
    }

    pub fn push_count(&self) -> usize {
        self.lock().pushed.len()
    }
}

impl Location for MemoryHistory {
    fn snapshot(&self) -> LocationSnapshot {
        LocationSnapshot::from(&self.lock().current)
    }
}

impl Navigator for MemoryHistory {
    fn push(&self, target: &NavigationTarget, options: NavigateOptions) {
        let mut state = self.lock();
        state.current = target.clone();
        state.pushed.push((target.clone(), options));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_moves_current_and_records_entry() {
        let history = MemoryHistory::from_href("/companions?page=2");
        assert_eq!(history.snapshot(), LocationSnapshot::new("/companions", "page=2"));

        let target = NavigationTarget::new("/companions", "page=2&subject=maths");
        history.push(&target, NavigateOptions { scroll: false });

        assert_eq!(history.current(), target);
        assert_eq!(history.push_count(), 1);
        let (entry, opts) = &history.entries()[0];
        assert_eq!(entry.href(), "/companions?page=2&subject=maths");
        assert!(!opts.scroll);
    }

    #[test]
    fn fresh_history_has_no_entries() {
        let history = MemoryHistory::new("/", "");
        assert_eq!(history.push_count(), 0);
        assert!(history.entries().is_empty());
    }
}
