//! Pattern Matching
//!
//! Camel-hump aware fuzzy matching of a pattern against short names:
//!
//! - Fragments of the pattern match consecutive characters of the name
//! - Every fragment begins at a word start (`getNameIdentifier` ← `GNI`, `gnid`)
//! - `*` lets the following fragment begin anywhere (`*oo` matches `foo`)
//! - A space forces a new hump; a trailing space anchors the end of the name
//!
//! # Example
//!
//! ```rust
//! use namegoto_core::matcher::{CaseSensitivity, Matcher};
//!
//! let matcher = Matcher::new("GNI", CaseSensitivity::None);
//! assert!(matcher.matches("getNameIdentifier"));
//! assert!(matcher.is_start_match("getNameIdentifier"));
//! ```

mod engine;
mod words;

pub use engine::{CaseSensitivity, Matcher, NameMatch};
pub use words::word_starts;

use crate::score::MatchResult;

/// Custom match decision: `(name, pattern) -> matches`
pub type CustomMatch<'a> = &'a (dyn Fn(&str, &str) -> bool + 'a);

/// Top-level name filtering capability, resolved once per search
#[derive(Clone, Copy, Default)]
pub enum NameFilter<'a> {
    /// Camel-hump matching via [`Matcher`]
    #[default]
    Fuzzy,
    /// Caller-supplied decision; degree is always 0 and every hit counts as a start match
    Custom(CustomMatch<'a>),
}

impl NameFilter<'_> {
    /// Whether results are ranked by matching degree
    pub fn is_ranked(&self) -> bool {
        matches!(self, NameFilter::Fuzzy)
    }

    /// Match one short name against `pattern`
    pub fn evaluate(&self, pattern: &str, matcher: &Matcher, name: &str) -> Option<MatchResult> {
        match self {
            NameFilter::Fuzzy => matcher
                .match_name(name)
                .map(|m| MatchResult::new(name, m.degree, m.start_match)),
            NameFilter::Custom(custom) => {
                custom(name, pattern).then(|| MatchResult::new(name, 0, true))
            }
        }
    }
}

impl std::fmt::Debug for NameFilter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameFilter::Fuzzy => f.write_str("Fuzzy"),
            NameFilter::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_filter_bypasses_matcher() {
        let exact = |name: &str, pattern: &str| name == pattern;
        let filter = NameFilter::Custom(&exact);
        let matcher = Matcher::new("zzz", CaseSensitivity::None);

        let result = filter.evaluate("Foo", &matcher, "Foo").unwrap();
        assert_eq!(result.matching_degree, 0);
        assert!(result.start_match);
        assert!(filter.evaluate("Foo", &matcher, "FooBar").is_none());
        assert!(!filter.is_ranked());
    }

    #[test]
    fn test_fuzzy_filter() {
        let matcher = Matcher::new("fb", CaseSensitivity::None);
        let result = NameFilter::Fuzzy.evaluate("fb", &matcher, "FooBar").unwrap();
        assert_eq!(result.name, "FooBar");
        assert!(result.start_match);
        assert!(result.matching_degree > 0);
    }
}
