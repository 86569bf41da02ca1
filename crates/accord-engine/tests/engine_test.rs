//! End-to-end engine behaviour with stub collaborators.

use std::sync::atomic::Ordering;

use accord_core::config::AccordConfig;
use accord_engine::ConsensusEngine;
use test_fixtures::{
    CountingEmbedder, FailingEmbedder, FailingExtractor, StubEmbedder, TableEmbedder,
    TableExtractor,
};

fn responses(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

fn table_engine(extractor: TableExtractor) -> ConsensusEngine {
    let embedder = TableEmbedder::new([
        ("alpha", vec![1.0, 0.0]),
        ("beta", vec![0.6, 0.8]),
        ("No, never, not.", vec![1.0, 0.0]),
        ("Yes indeed.", vec![1.0, 0.0]),
    ]);
    ConsensusEngine::new(Box::new(embedder), Box::new(extractor), &AccordConfig::default())
        .unwrap()
}

#[test]
fn combines_all_three_stages() {
    let extractor = TableExtractor::new()
        .with("alpha", &[("CARDINAL", "100")])
        .with("beta", &[("CARDINAL", "200")]);
    let mut engine = table_engine(extractor);

    let report = engine.evaluate(&responses(&["alpha", "beta"]));
    assert!((report.base_similarity.value() - 0.6).abs() < 1e-6);
    assert!((report.entity_adjustment.value() - 1.1).abs() < 1e-12);
    assert_eq!(report.contradiction_penalty.value(), 0.0);
    assert!((report.score() - 0.66).abs() < 1e-6);
    assert!(!report.is_degraded());
}

#[test]
fn contradiction_scales_score_down() {
    let mut engine = table_engine(TableExtractor::new());
    let score = engine.measure_consensus(&responses(&["No, never, not.", "Yes indeed."]));
    assert!((score - 0.5).abs() < 1e-9, "got {score}");
}

#[test]
fn embedder_failure_yields_zero() {
    let mut engine = ConsensusEngine::new(
        Box::new(FailingEmbedder),
        Box::new(TableExtractor::new()),
        &AccordConfig::default(),
    )
    .unwrap();

    let report = engine.evaluate(&responses(&["a", "b"]));
    assert_eq!(report.score(), 0.0);
    assert!(report.base_similarity.is_degraded());
    assert!(report.base_similarity.reason().unwrap().contains("mock failure"));

    let events = engine.drain_degradation_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].component, "similarity");
    assert!(engine.drain_degradation_events().is_empty());
}

#[test]
fn extractor_failure_is_neutral() {
    let mut engine = ConsensusEngine::new(
        Box::new(StubEmbedder::new(16)),
        Box::new(FailingExtractor),
        &AccordConfig::default(),
    )
    .unwrap();

    let set = responses(&["same text", "same text"]);
    let report = engine.evaluate(&set);
    assert!(report.entity_adjustment.is_degraded());
    assert_eq!(report.entity_adjustment.value(), 1.0);
    assert!(!report.base_similarity.is_degraded());
    assert!((report.score() - 1.0).abs() < 1e-9);

    let events = engine.drain_degradation_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].component, "entities");
    assert_eq!(events[0].fallback_used, "1");
}

#[test]
fn no_signal_is_distinguishable_from_failure() {
    let mut engine = ConsensusEngine::new(
        Box::new(StubEmbedder::new(16)),
        Box::new(TableExtractor::new()),
        &AccordConfig::default(),
    )
    .unwrap();
    let report = engine.evaluate(&responses(&["x", "y"]));
    assert_eq!(report.entity_adjustment.value(), 1.0);
    assert!(!report.entity_adjustment.is_degraded());
}

#[test]
fn dimension_mismatch_yields_zero() {
    let embedder = TableEmbedder::new([("short", vec![1.0]), ("long", vec![1.0, 0.0])]);
    let mut engine = ConsensusEngine::new(
        Box::new(embedder),
        Box::new(TableExtractor::new()),
        &AccordConfig::default(),
    )
    .unwrap();
    let report = engine.evaluate(&responses(&["short", "long"]));
    assert_eq!(report.score(), 0.0);
    assert!(report.base_similarity.reason().unwrap().contains("dimension mismatch"));
}

#[test]
fn undeclared_dimension_yields_zero() {
    let embedder =
        TableEmbedder::new([("a", vec![1.0, 0.0]), ("b", vec![0.0, 1.0])]).declaring(4);
    let mut engine = ConsensusEngine::new(
        Box::new(embedder),
        Box::new(TableExtractor::new()),
        &AccordConfig::default(),
    )
    .unwrap();
    let report = engine.evaluate(&responses(&["a", "b"]));
    assert_eq!(report.score(), 0.0);
    assert!(report
        .base_similarity
        .reason()
        .unwrap()
        .contains("expected 4, got 2"));
}

#[test]
fn cache_persists_across_calls() {
    let embedder = CountingEmbedder::new(StubEmbedder::new(16));
    let calls = embedder.counter();
    let mut engine = ConsensusEngine::new(
        Box::new(embedder),
        Box::new(TableExtractor::new()),
        &AccordConfig::default(),
    )
    .unwrap();

    let set = responses(&["first answer", "second answer"]);
    let first = engine.measure_consensus(&set);
    let second = engine.measure_consensus(&set);
    assert_eq!(first, second);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(engine.cache_len(), 2);

    engine.clear_cache();
    engine.measure_consensus(&set);
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[test]
fn single_response_skips_collaborators() {
    let mut engine = ConsensusEngine::new(
        Box::new(FailingEmbedder),
        Box::new(FailingExtractor),
        &AccordConfig::default(),
    )
    .unwrap();
    assert_eq!(engine.measure_consensus(&responses(&["alone"])), 1.0);
    assert!(engine.drain_degradation_events().is_empty());
}

#[test]
fn report_serializes_stage_status() {
    let mut engine = ConsensusEngine::new(
        Box::new(FailingEmbedder),
        Box::new(TableExtractor::new()),
        &AccordConfig::default(),
    )
    .unwrap();
    let report = engine.evaluate(&responses(&["a", "b"]));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["base_similarity"]["status"], "degraded");
    assert_eq!(json["result"]["consensus_score"], 0.0);
}
