use accord_contradiction::ContradictionDetector;
use accord_core::config::ContradictionConfig;
use proptest::prelude::*;

fn detector() -> ContradictionDetector {
    ContradictionDetector::new(ContradictionConfig::default()).unwrap()
}

fn word() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "not", "never", "no", "inte", "impossible", "but", "however", "men", "tvärtom",
        "launch", "revenue", "grew", "the", "plan", "is", "on", "track",
    ])
    .prop_map(str::to_string)
}

fn response() -> impl Strategy<Value = String> {
    prop::collection::vec(word(), 0..12).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn penalty_is_bounded(set in prop::collection::vec(response(), 0..6)) {
        let p = detector().penalty(&set);
        prop_assert!((0.0..=0.8).contains(&p), "penalty {} out of range", p);
    }

    #[test]
    fn penalty_ignores_order(set in prop::collection::vec(response(), 2..6)) {
        let d = detector();
        let mut reversed = set.clone();
        reversed.reverse();
        prop_assert!((d.penalty(&set) - d.penalty(&reversed)).abs() < 1e-12);
    }

    #[test]
    fn neutral_vocabulary_has_no_penalty(
        set in prop::collection::vec(
            prop::collection::vec(
                prop::sample::select(vec!["launch", "revenue", "grew", "plan", "track"]),
                0..10,
            ).prop_map(|w| w.join(" ")),
            0..6,
        )
    ) {
        prop_assert_eq!(detector().penalty(&set), 0.0);
    }
}
