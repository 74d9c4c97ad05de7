//! Navigation target: a path plus a rebuilt query string.

use std::fmt;

/// URL the controller asks the navigator to go to.
///
/// Renders as `path` when the query is empty, otherwise `path?query`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NavigationTarget {
    path: String,
    query: String,
}

impl NavigationTarget {
    /// Builds a target; a leading `?` on `query` is dropped.
    pub fn new(path: impl Into<String>, query: impl Into<String>) -> Self {
        let query = query.into();
        let query = match query.strip_prefix('?') {
            Some(rest) => rest.to_string(),
            None => query,
        };
        Self {
            path: path.into(),
            query,
        }
    }

    /// Splits an href (`/companions?subject=maths#top`) into path and query.
    /// Any fragment is discarded.
    pub fn parse(href: &str) -> Self {
        let without_fragment = href.split_once('#').map_or(href, |(h, _)| h);
        match without_fragment.split_once('?') {
            Some((path, query)) => Self::new(path, query),
            None => Self::new(without_fragment, ""),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn href(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.query.is_empty() {
            write!(f, "{}", self.path)
        } else {
            write!(f, "{}?{}", self.path, self.query)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_omits_empty_query() {
        assert_eq!(NavigationTarget::new("/companions", "").href(), "/companions");
        assert_eq!(
            NavigationTarget::new("/companions", "?page=2").href(),
            "/companions?page=2"
        );
    }

    #[test]
    fn parse_splits_and_drops_fragment() {
        let t = NavigationTarget::parse("/companions?subject=maths#top");
        assert_eq!(t.path(), "/companions");
        assert_eq!(t.query(), "subject=maths");

        let t = NavigationTarget::parse("/my-journey");
        assert_eq!(t.path(), "/my-journey");
        assert_eq!(t.query(), "");
    }
}
