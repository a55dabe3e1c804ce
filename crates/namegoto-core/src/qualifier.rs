//! Qualifier resolution
//!
//! A query like `util/io/Reader` is split at its last separator into a name pattern
//! (`Reader`) matched against short names, and a qualifier pattern (`util/io`) whose
//! segments disambiguate candidates sharing a short name.

use crate::config::SearchConfig;
use crate::matcher::{CaseSensitivity, Matcher};
use crate::tokenize;

/// A query split into its name and qualifier parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPattern {
    pub name: String,
    pub qualifier: String,
}

impl ResolvedPattern {
    /// Strip configured markup from `raw` and split it at the last separator
    pub fn resolve(raw: &str, config: &SearchConfig) -> Self {
        let pattern = config.strip_markup(raw);
        Self {
            name: name_pattern(pattern, &config.separators).to_string(),
            qualifier: qualifier_pattern(pattern, &config.separators).to_string(),
        }
    }

    pub fn has_qualifier(&self) -> bool {
        !self.qualifier.is_empty()
    }
}

/// One qualifier segment pattern with its matcher
#[derive(Debug, Clone)]
pub struct SubPattern {
    pub pattern: String,
    pub matcher: Matcher,
}

impl SubPattern {
    fn new(pattern: String) -> Self {
        let matcher = Matcher::new(&pattern, CaseSensitivity::None);
        Self { pattern, matcher }
    }

    /// Empty sub-patterns align anywhere without consuming a segment
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }
}

/// Text after the end of the last separator occurrence (whole pattern if none occurs)
pub fn name_pattern<'a, S: AsRef<str>>(pattern: &'a str, separators: &[S]) -> &'a str {
    let start = separators
        .iter()
        .map(AsRef::as_ref)
        .filter(|sep| !sep.is_empty())
        .filter_map(|sep| pattern.rfind(sep).map(|idx| idx + sep.len()))
        .max()
        .unwrap_or(0);
    &pattern[start..]
}

/// Text before the last separator occurrence (empty if none occurs)
pub fn qualifier_pattern<'a, S: AsRef<str>>(pattern: &'a str, separators: &[S]) -> &'a str {
    let end = separators
        .iter()
        .map(AsRef::as_ref)
        .filter(|sep| !sep.is_empty())
        .filter_map(|sep| pattern.rfind(sep))
        .max()
        .unwrap_or(0);
    &pattern[..end]
}

/// The pattern used for top-level name matching: `*`-prefixed when searching anywhere
pub fn matching_pattern(name_pattern: &str, search_anywhere: bool) -> String {
    if search_anywhere && !name_pattern.trim().is_empty() {
        format!("*{name_pattern}")
    } else {
        name_pattern.to_string()
    }
}

/// Build one sub-matcher per qualifier segment.
///
/// An empty qualifier yields a single empty sub-pattern, which aligns trivially.
pub fn sub_patterns<S: AsRef<str>>(
    qualifier: &str,
    separators: &[S],
    search_anywhere: bool,
) -> Vec<SubPattern> {
    tokenize::split(qualifier, separators)
        .into_iter()
        .map(|token| {
            let tail = name_pattern(token, separators);
            SubPattern::new(matching_pattern(tail, search_anywhere))
        })
        .collect()
}
