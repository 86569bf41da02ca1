//! Embedding cache behaviour against stub embedders.

use std::sync::atomic::Ordering;

use accord_core::config::EmbeddingConfig;
use accord_embeddings::cache::{cache_key, EmbeddingCache};
use test_fixtures::{CountingEmbedder, FailingEmbedder, StubEmbedder, TableEmbedder};

fn config() -> EmbeddingConfig {
    EmbeddingConfig::default()
}

#[test]
fn repeated_embed_calls_model_once() {
    let embedder = CountingEmbedder::new(StubEmbedder::new(16));
    let calls = embedder.counter();
    let cache = EmbeddingCache::new(Box::new(embedder), &config());

    let a = cache.embed("The launch is in 2024.").unwrap();
    let b = cache.embed("The launch is in 2024.").unwrap();

    assert_eq!(a, b);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn distinct_texts_each_call_model() {
    let embedder = CountingEmbedder::new(StubEmbedder::new(16));
    let calls = embedder.counter();
    let cache = EmbeddingCache::new(Box::new(embedder), &config());

    cache.embed("first").unwrap();
    cache.embed("second").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(cache.len(), 2);
}

#[test]
fn miss_embeds_normalized_text() {
    // The table only knows the cleaned form; a hit proves normalization ran.
    let embedder = TableEmbedder::new([("Hello world", vec![1.0, 0.0])]);
    let cache = EmbeddingCache::new(Box::new(embedder), &config());
    assert_eq!(cache.embed("  **Hello**   world ").unwrap(), vec![1.0, 0.0]);
}

#[test]
fn colliding_keys_share_an_entry() {
    let base = "p".repeat(100);
    let first = format!("{base} alpha");
    let second = format!("{base} omega");
    assert_eq!(cache_key(&first), cache_key(&second));

    let embedder = CountingEmbedder::new(StubEmbedder::new(8));
    let calls = embedder.counter();
    let cache = EmbeddingCache::new(Box::new(embedder), &config());

    let a = cache.embed(&first).unwrap();
    let b = cache.embed(&second).unwrap();
    assert_eq!(a, b);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn failures_are_not_cached() {
    let cache = EmbeddingCache::new(Box::new(FailingEmbedder), &config());
    assert!(cache.embed("anything").is_err());
    assert!(cache.is_empty());
}

#[test]
fn embed_all_preserves_order() {
    let cache = EmbeddingCache::new(Box::new(StubEmbedder::new(8)), &config());
    let texts = vec!["one".to_string(), "two".to_string()];
    let all = cache.embed_all(&texts).unwrap();
    assert_eq!(all[0], cache.embed("one").unwrap());
    assert_eq!(all[1], cache.embed("two").unwrap());
}

#[test]
fn clear_forces_recompute() {
    let embedder = CountingEmbedder::new(StubEmbedder::new(8));
    let calls = embedder.counter();
    let cache = EmbeddingCache::new(Box::new(embedder), &config());

    cache.embed("again").unwrap();
    cache.clear();
    cache.embed("again").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
