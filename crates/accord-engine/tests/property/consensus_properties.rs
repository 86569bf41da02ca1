use accord_contradiction::ContradictionDetector;
use accord_core::config::{AccordConfig, ContradictionConfig};
use accord_engine::ConsensusEngine;
use proptest::prelude::*;

fn engine() -> ConsensusEngine {
    ConsensusEngine::builtin(&AccordConfig::default()).unwrap()
}

fn word() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "launch", "2024", "2025", "15%", "$40", "revenue", "grew", "not", "never", "but",
        "however", "inte", "men", "**bold**", "#", "the", "plan", "12", "300", "0",
    ])
    .prop_map(str::to_string)
}

fn response() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..15).prop_map(|words| words.join(" "))
}

/// Arbitrary short text holding no disagreement connective. Two copies of a
/// connective already exceed the disagreement threshold.
fn connective_free_text() -> impl Strategy<Value = String> {
    let detector = ContradictionDetector::new(ContradictionConfig::default()).unwrap();
    ".{0,50}".prop_filter("contains a disagreement connective", move |t| {
        detector.penalty(&[t.clone(), t.clone()]) == 0.0
    })
}

proptest! {
    #[test]
    fn score_is_bounded(set in prop::collection::vec(response(), 1..6)) {
        let score = engine().measure_consensus(&set);
        prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
    }

    #[test]
    fn single_response_scores_one(text in ".{0,300}") {
        prop_assert_eq!(engine().measure_consensus(&[text]), 1.0);
    }

    #[test]
    fn score_ignores_order(set in prop::collection::vec(response(), 2..6), rotate in 0usize..6) {
        let mut e = engine();
        let mut rotated = set.clone();
        let k = rotate % rotated.len();
        rotated.rotate_left(k);
        let a = e.measure_consensus(&set);
        let b = e.measure_consensus(&rotated);
        prop_assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
    }

    #[test]
    fn identical_responses_score_one(text in connective_free_text(), n in 2usize..5) {
        let set = vec![text; n];
        let score = engine().measure_consensus(&set);
        prop_assert!((score - 1.0).abs() < 1e-9, "got {}", score);
    }
}
