//! Match results and qualifier scoring

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::proximity::Representation;
use crate::qualifier::SubPattern;

/// A graded match of one name.
///
/// Ordering: start matches first, then higher degree, then case-insensitive name, with
/// a final case-sensitive comparison so the order stays total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub name: String,
    pub matching_degree: i32,
    pub start_match: bool,
}

impl MatchResult {
    pub fn new(name: impl Into<String>, matching_degree: i32, start_match: bool) -> Self {
        Self {
            name: name.into(),
            matching_degree,
            start_match,
        }
    }
}

impl Ord for MatchResult {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .start_match
            .cmp(&self.start_match)
            .then_with(|| other.matching_degree.cmp(&self.matching_degree))
            .then_with(|| compare_ignore_case(&self.name, &other.name))
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for MatchResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// A candidate that passed qualifier scoring
#[derive(Debug, Clone)]
pub struct ScoredCandidate<T> {
    pub item: T,
    pub full_name: String,
    pub representation: Representation,
    pub score: MatchResult,
}

/// Penalty for a segment skipped at index `j`; grows quadratically with distance from
/// the start so matches close to the name segment dominate distant ones
fn skip_penalty(j: usize) -> i32 {
    let step = (j + 1) as i32;
    step * step
}

/// Align qualifier sub-patterns against the segments of `full_name`.
///
/// The last segment is the name itself and never takes part. Each non-empty
/// sub-pattern must match a segment strictly after the previous hit; every segment
/// skipped along the way, and every segment left between the final hit and the name
/// segment, costs [`skip_penalty`]. Returns `None` when a sub-pattern cannot align.
pub fn match_qualifier(
    full_name: &str,
    segments: &[&str],
    sub_patterns: &[SubPattern],
) -> Option<MatchResult> {
    let qualifier_len = segments.len().saturating_sub(1);
    let mut degree = 0;
    let mut position = 0;
    let mut start_match = true;

    for sub in sub_patterns {
        if sub.is_empty() {
            continue;
        }

        let mut aligned = false;
        for (j, segment) in segments
            .iter()
            .enumerate()
            .take(qualifier_len)
            .skip(position)
        {
            if let Some(hit) = sub.matcher.match_name(segment) {
                degree += hit.degree;
                start_match &= hit.start_match;
                position = j + 1;
                aligned = true;
                break;
            }
            degree -= skip_penalty(j);
        }

        if !aligned {
            return None;
        }
    }

    for j in position..qualifier_len {
        degree -= skip_penalty(j);
    }

    Some(MatchResult::new(full_name, degree, start_match))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qualifier::sub_patterns;
    use crate::tokenize::split;

    const SLASH: &[&str] = &["/"];

    fn score(full_name: &str, qualifier: &str) -> Option<MatchResult> {
        let subs = sub_patterns(qualifier, SLASH, false);
        match_qualifier(full_name, &split(full_name, SLASH), &subs)
    }

    #[test]
    fn test_ordering_start_then_degree_then_name() {
        let mut results = vec![
            MatchResult::new("zeta", 5, false),
            MatchResult::new("Beta", 10, true),
            MatchResult::new("alpha", 10, true),
            MatchResult::new("gamma", 20, true),
        ];
        results.sort();
        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["gamma", "alpha", "Beta", "zeta"]);
    }

    #[test]
    fn test_ordering_total_on_case_only_difference() {
        let upper = MatchResult::new("Foo", 1, true);
        let lower = MatchResult::new("foo", 1, true);
        assert_ne!(upper.cmp(&lower), Ordering::Equal);
        assert_eq!(upper.cmp(&lower), lower.cmp(&upper).reverse());
    }

    #[test]
    fn test_adjacent_qualifier_preferred() {
        let near = score("bar/foo/index.html", "foo").unwrap();
        let far = score("foo/bar/index.html", "foo").unwrap();
        assert!(near.matching_degree > far.matching_degree);
        assert!(near < far);
    }

    #[test]
    fn test_penalty_values() {
        let base = score("foo/index.html", "foo").unwrap().matching_degree;
        // skipped "bar" at index 0 costs 1
        assert_eq!(score("bar/foo/index.html", "foo").unwrap().matching_degree, base - 1);
        // trailing "bar" at index 1 costs 4
        assert_eq!(score("foo/bar/index.html", "foo").unwrap().matching_degree, base - 4);
    }

    #[test]
    fn test_out_of_order_rejected() {
        assert!(score("bar/foo/index.html", "foo/bar").is_none());
        assert!(score("foo/bar/index.html", "foo/bar").is_some());
    }

    #[test]
    fn test_segment_not_reused() {
        assert!(score("foo/index.html", "foo/foo").is_none());
        assert!(score("foo/foo/index.html", "foo/foo").is_some());
    }

    #[test]
    fn test_name_segment_never_consulted() {
        assert!(score("bar/index.html", "index").is_none());
    }

    #[test]
    fn test_empty_qualifier_penalizes_all_segments() {
        let result = score("a/b/index.html", "").unwrap();
        assert_eq!(result.matching_degree, -(1 + 4));
        assert!(result.start_match);
        assert_eq!(score("index.html", "").unwrap().matching_degree, 0);
    }

    #[test]
    fn test_start_flag_is_conjunction() {
        let subs = sub_patterns("oo", SLASH, true);
        let result = match_qualifier("foo/x", &split("foo/x", SLASH), &subs).unwrap();
        assert!(!result.start_match);
    }
}
