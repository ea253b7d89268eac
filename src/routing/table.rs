//! The static route table.
//!
//! # Responsibilities
//! - Name every route the application knows (closed enum)
//! - Pair each route with its URL matcher
//! - Fix the order in which matchers are tried
//!
//! # Design Decisions
//! - Matchers are evaluated in table order; first match wins
//! - Exact matching is case-sensitive string equality
//! - The only parameter style is a single numeric trailing segment

use serde::{Deserialize, Serialize};

/// Identifier for every route the application can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKey {
    /// The post list on `/`.
    List,
    /// A single post on `/posts/{id}`.
    Detail,
}

impl RouteKey {
    /// Stable label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteKey::List => "list",
            RouteKey::Detail => "detail",
        }
    }
}

/// URL matcher for one route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// The path must equal this string exactly.
    Exact(&'static str),
    /// The path must be `prefix` followed by one non-empty all-digit
    /// segment, which is captured as the route's sole parameter.
    NumericSegment { prefix: &'static str },
}

impl Matcher {
    /// Evaluate the matcher against a path.
    ///
    /// Returns the captured parameters on a full match. Exact matches
    /// capture nothing; `NumericSegment` captures exactly one value.
    pub fn matches(&self, path: &str) -> Option<Vec<String>> {
        match self {
            Matcher::Exact(expected) => (path == *expected).then(Vec::new),
            Matcher::NumericSegment { prefix } => {
                let rest = path.strip_prefix(prefix)?;
                if rest.is_empty() || !rest.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                Some(vec![rest.to_string()])
            }
        }
    }
}

/// One entry in the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub key: RouteKey,
    pub matcher: Matcher,
}

/// Every route, in match order. Immutable after process start.
pub const ROUTES: &[Route] = &[
    Route {
        key: RouteKey::List,
        matcher: Matcher::Exact("/"),
    },
    Route {
        key: RouteKey::Detail,
        matcher: Matcher::NumericSegment { prefix: "/posts/" },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_matcher_requires_equality() {
        let matcher = Matcher::Exact("/");
        assert_eq!(matcher.matches("/"), Some(vec![]));
        assert_eq!(matcher.matches("/posts"), None);
        assert_eq!(matcher.matches(""), None);
    }

    #[test]
    fn numeric_segment_captures_digits() {
        let matcher = Matcher::NumericSegment { prefix: "/posts/" };
        assert_eq!(matcher.matches("/posts/123"), Some(vec!["123".to_string()]));
        assert_eq!(matcher.matches("/posts/"), None);
        assert_eq!(matcher.matches("/posts/abc"), None);
        assert_eq!(matcher.matches("/posts/12x"), None);
        assert_eq!(matcher.matches("/posts/12/edit"), None);
    }

    #[test]
    fn route_key_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&RouteKey::List).unwrap(), "\"list\"");
        assert_eq!(
            serde_json::to_string(&RouteKey::Detail).unwrap(),
            "\"detail\""
        );
    }
}
