//! Property tests for matching invariants

use fuzzbooth_core::{scale_criterion, search_for_phrase, MatchConfig, MatchRecord};
use proptest::prelude::*;

fn token() -> impl Strategy<Value = String> {
    "[a-d]{1,4}"
}

fn sequence(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(token(), 1..=max_len)
}

proptest! {
    #[test]
    fn identity_matches_at_zero(tokens in sequence(8), cost in 0.0f64..3.0) {
        let config = MatchConfig::default().with_substitution_cost(cost);
        let results = search_for_phrase(&tokens, &tokens, &config).unwrap();
        let first = &results.records()[0];
        prop_assert_eq!(first.index(), Some(0));
        prop_assert_eq!(first.distance(), Some(0.0));
    }

    #[test]
    fn phrase_longer_than_document_is_single_not_found(
        document in sequence(4),
        extra in sequence(4),
        criterion in 0.0f64..50.0,
    ) {
        let mut phrase = document.clone();
        phrase.extend(extra);
        let config = MatchConfig::default().with_criterion(criterion);
        let results = search_for_phrase(&document, &phrase, &config).unwrap();
        prop_assert_eq!(results.len(), 1);
        prop_assert!(results.is_not_found());
    }

    #[test]
    fn raising_criterion_never_drops_matches(
        document in sequence(12),
        phrase in sequence(3),
        low in 0.0f64..4.0,
        bump in 0.0f64..4.0,
    ) {
        let lower = search_for_phrase(&document, &phrase, &MatchConfig::default().with_criterion(low)).unwrap();
        let higher = search_for_phrase(&document, &phrase, &MatchConfig::default().with_criterion(low + bump)).unwrap();
        let higher_indices = higher.indices();
        for index in lower.indices() {
            prop_assert!(higher_indices.contains(&index));
        }
    }

    #[test]
    fn results_never_mix_and_stay_ordered(
        document in sequence(12),
        phrase in sequence(3),
        criterion in 0.0f64..6.0,
        transpositions in any::<bool>(),
    ) {
        let config = MatchConfig::default()
            .with_criterion(criterion)
            .with_transpositions(transpositions);
        let results = search_for_phrase(&document, &phrase, &config).unwrap();

        let found = results.records().iter().filter(|r| r.is_found()).count();
        prop_assert!(found == 0 || found == results.len());
        if found == 0 {
            prop_assert_eq!(results.len(), 1);
        }

        let indices = results.indices();
        prop_assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));
        for record in results.records() {
            if let MatchRecord::Found { matched, index, distance, .. } = record {
                prop_assert_eq!(matched.len(), phrase.len());
                prop_assert_eq!(matched.as_slice(), &document[*index..*index + phrase.len()]);
                prop_assert!(*distance >= 0.0 && *distance <= criterion);
            }
        }
    }

    #[test]
    fn scaling_is_monotonic_in_phrase_len(
        base in 0.0f64..10.0,
        len in 0usize..500,
        denominator in 0.5f64..200.0,
    ) {
        let shorter = scale_criterion(base, len, true, denominator).unwrap();
        let longer = scale_criterion(base, len + 1, true, denominator).unwrap();
        prop_assert!(longer >= shorter);
        prop_assert!(shorter >= base);
    }
}
