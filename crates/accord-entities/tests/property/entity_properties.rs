//! Property-based tests for numeric agreement and span recognition.

use accord_core::traits::EntityExtractor;
use accord_entities::numeric::{numeric_similarity, value_similarity};
use accord_entities::PatternRecognizer;
use proptest::prelude::*;

fn value_lists() -> impl Strategy<Value = Vec<Vec<f64>>> {
    prop::collection::vec(prop::collection::vec(0.0f64..1.0e6, 0..4), 0..6)
}

proptest! {
    #[test]
    fn numeric_similarity_is_bounded(lists in value_lists()) {
        let sim = numeric_similarity(&lists);
        prop_assert!((0.0..=1.0).contains(&sim), "got {}", sim);
    }

    #[test]
    fn numeric_similarity_ignores_response_order(lists in value_lists()) {
        let mut reversed = lists.clone();
        reversed.reverse();
        let forward = numeric_similarity(&lists);
        let backward = numeric_similarity(&reversed);
        prop_assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn value_similarity_is_symmetric(a in 0.0f64..1.0e6, b in 0.0f64..1.0e6) {
        prop_assert_eq!(value_similarity(a, b), value_similarity(b, a));
    }

    #[test]
    fn recognizer_spans_come_from_the_text(text in "[a-zA-Z0-9 $%.,]{0,80}") {
        let spans = PatternRecognizer::new().extract(&text).unwrap();
        for span in spans {
            prop_assert!(text.contains(&span.text));
        }
    }
}
