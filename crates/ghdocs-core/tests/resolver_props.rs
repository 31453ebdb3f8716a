// Rust guideline compliant 2026-02-06

//! Property-based tests for approximate identifier resolution.

use ghdocs_core::{distance, normalize, resolve, ResolverConfig};
use proptest::prelude::*;

/// Generates candidate names shaped like remote directory and file names.
fn arb_name() -> impl Strategy<Value = String> {
    prop::string::string_regex("([0-9]{2}[_-])?[a-e]{1,6}([_-][a-e]{1,4})?").unwrap()
}

fn arb_pool() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_name(), 0..8)
}

fn arb_config() -> impl Strategy<Value = ResolverConfig> {
    (1usize..5, 0usize..5).prop_map(|(threshold, max_suggestions)| ResolverConfig {
        threshold,
        max_suggestions,
    })
}

proptest! {
    /// The result is always well formed for valid configuration.
    #[test]
    fn prop_result_invariants(input in arb_name(), pool in arb_pool(), config in arb_config()) {
        let result = resolve(&input, &pool, &config).unwrap();

        prop_assert!((0.0..=1.0).contains(&result.score));
        match &result.matched {
            Some(matched) => {
                prop_assert!(pool.contains(matched));
            }
            None => {
                prop_assert_eq!(result.score, 0.0);
                prop_assert!(result.suggestions.len() <= config.max_suggestions);
            }
        }
        for suggestion in &result.suggestions {
            prop_assert!(pool.contains(suggestion));
        }
    }

    /// A match never reappears among its own suggestions.
    #[test]
    fn prop_match_not_in_suggestions(input in arb_name(), pool in arb_pool(), config in arb_config()) {
        let result = resolve(&input, &pool, &config).unwrap();
        if let Some(matched) = &result.matched {
            prop_assert!(!result.suggestions.contains(matched));
        }
    }

    /// Any candidate resolves exactly to itself, or to an earlier equivalent.
    #[test]
    fn prop_candidate_resolves_to_itself(pool in prop::collection::vec(arb_name(), 1..8), pick in any::<prop::sample::Index>()) {
        let chosen = pick.get(&pool).clone();
        let result = resolve(&chosen, &pool, &ResolverConfig::default()).unwrap();
        prop_assert_eq!(result.score, 1.0);
        prop_assert!(result.suggestions.is_empty());

        let matched = result.matched.unwrap();
        let first = pool.iter().find(|c| normalize(c) == normalize(&chosen)).unwrap();
        prop_assert_eq!(&matched, first);
    }

    /// The score reflects the edit distance to the chosen candidate.
    #[test]
    fn prop_fuzzy_score_matches_distance(input in arb_name(), pool in arb_pool()) {
        let result = resolve(&input, &pool, &ResolverConfig::default()).unwrap();
        if let Some(matched) = &result.matched {
            let a = normalize(&input);
            let b = normalize(matched);
            let longest = a.chars().count().max(b.chars().count());
            let expected = if longest == 0 {
                1.0
            } else {
                1.0 - distance(&a, &b) as f64 / longest as f64
            };
            prop_assert!((result.score - expected).abs() < 1e-9);
        }
    }

    /// No candidate is strictly closer than the one chosen.
    #[test]
    fn prop_match_is_closest(input in arb_name(), pool in arb_pool()) {
        let result = resolve(&input, &pool, &ResolverConfig::default()).unwrap();
        if let Some(matched) = &result.matched {
            let target = normalize(&input);
            let best = distance(&target, &normalize(matched));
            for candidate in &pool {
                prop_assert!(distance(&target, &normalize(candidate)) >= best);
            }
        }
    }

    /// Resolution is referentially transparent.
    #[test]
    fn prop_resolve_is_deterministic(input in arb_name(), pool in arb_pool(), config in arb_config()) {
        let first = resolve(&input, &pool, &config).unwrap();
        let second = resolve(&input, &pool, &config).unwrap();
        prop_assert_eq!(first, second);
    }
}
