//! Path prefix matching.
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Stripping is purely textual: no normalization, no `..` handling
//! - No regex to guarantee O(n) matching

/// Matches and strips a request path prefix.
#[derive(Debug, Clone)]
pub struct PathPrefixMatcher {
    prefix: String,
}

impl PathPrefixMatcher {
    /// Create a new path prefix matcher.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Returns the path with exactly the prefix characters removed, or
    /// `None` when the path does not start with the prefix.
    pub fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        path.strip_prefix(self.prefix.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_matcher() {
        let matcher = PathPrefixMatcher::new("/api/");

        assert!(matcher.strip("/api/v1/models").is_some());
        assert!(matcher.strip("/api/").is_some());
        assert!(matcher.strip("/api").is_none());
        assert!(matcher.strip("/API/v1/models").is_none());
        assert!(matcher.strip("/images/api/logo.png").is_none());
    }

    #[test]
    fn test_strip_is_textual() {
        let matcher = PathPrefixMatcher::new("/api/");

        assert_eq!(matcher.strip("/api/v1/models"), Some("v1/models"));
        assert_eq!(matcher.strip("/api/"), Some(""));
        assert_eq!(matcher.strip("/api//v1"), Some("/v1"));
        assert_eq!(matcher.strip("/api/../etc/passwd"), Some("../etc/passwd"));
        assert_eq!(matcher.strip("/static/app.js"), None);
    }
}
