//! Property-based tests for ordering, qualifier scoring and streaming invariants

use namegoto_core::qualifier::{matching_pattern, sub_patterns};
use namegoto_core::score::match_qualifier;
use namegoto_core::tokenize::split;
use namegoto_core::{
    Collect, Emitted, MatchResult, Matcher, MemoryIndex, Never, Search, SearchConfig, Symbol,
};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

fn arb_match_result() -> impl Strategy<Value = MatchResult> {
    ("[a-cA-C]{0,4}", -50i32..50, any::<bool>())
        .prop_map(|(name, degree, start)| MatchResult::new(name, degree, start))
}

/// Short names over a tiny alphabet so patterns hit often
fn arb_short_name() -> impl Strategy<Value = String> {
    "[a-cA-C]{1,6}"
}

fn qualifier_degree(full_name: &str, qualifier: &str) -> Option<i32> {
    let subs = sub_patterns(qualifier, &["/"], false);
    match_qualifier(full_name, &split(full_name, &["/"]), &subs).map(|r| r.matching_degree)
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn sorting_match_results_is_idempotent(mut results in prop::collection::vec(arb_match_result(), 0..24)) {
        results.sort();
        let mut again = results.clone();
        again.sort();
        prop_assert_eq!(results, again);
    }

    #[test]
    fn match_result_order_is_antisymmetric(a in arb_match_result(), b in arb_match_result()) {
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
        prop_assert_eq!(a.cmp(&b).is_eq(), a == b);
    }

    #[test]
    fn penalty_grows_with_trailing_skips(k in 0usize..6) {
        let near = format!("a/{}Name", "z/".repeat(k));
        let far = format!("a/{}Name", "z/".repeat(k + 1));
        let near = qualifier_degree(&near, "a").unwrap();
        let far = qualifier_degree(&far, "a").unwrap();
        prop_assert!(near > far);
    }

    #[test]
    fn adjacent_qualifier_beats_one_segment_further(k in 0usize..6) {
        let adjacent = format!("{}a/Name", "z/".repeat(k + 1));
        let further = format!("{}a/z/Name", "z/".repeat(k));
        let adjacent = qualifier_degree(&adjacent, "a").unwrap();
        let further = qualifier_degree(&further, "a").unwrap();
        prop_assert!(adjacent > further);
    }

    #[test]
    fn split_never_loses_input(text in "[a-z/.]{0,12}") {
        let tokens = split(&text, &["/", "."]);
        prop_assert!(!tokens.is_empty());
        prop_assert!(tokens == vec![text.as_str()] || tokens.iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn every_emitted_item_matches_pattern(
        names in prop::collection::vec(arb_short_name(), 1..16),
        pattern in "[a-cA-C]{1,3}",
    ) {
        let index = MemoryIndex::with_symbols(
            names.iter().map(|name| Symbol::new(name.as_str(), format!("p/{name}"))),
        );
        let config = SearchConfig::new().separators(["/"]);
        let mut collect = Collect::new();
        Search::new(&index, &config)
            .run(&pattern, &Never, &mut collect)
            .unwrap();

        let matcher = Matcher::new(
            &matching_pattern(&pattern, config.search_anywhere),
            config.case_sensitivity,
        );
        let items: Vec<&Symbol> = collect.items.iter().filter_map(Emitted::item).collect();
        for symbol in &items {
            prop_assert!(matcher.matches(&symbol.short_name));
        }

        let expected = names.iter().filter(|name| matcher.matches(name)).count();
        prop_assert_eq!(items.len(), expected);

        let separators = collect.items.iter().filter(|e| e.is_separator()).count();
        prop_assert!(separators <= 1);
    }
}
