use accord_core::config::EmbeddingConfig;
use accord_core::traits::Embedder;
use accord_embeddings::cache::EmbeddingCache;
use accord_embeddings::normalizer::TextNormalizer;
use accord_embeddings::HashingEmbedder;
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalize_is_idempotent(s in ".{0,700}") {
        let n = TextNormalizer::default();
        let once = n.normalize(&s);
        prop_assert_eq!(n.normalize(&once), once.clone());
    }

    #[test]
    fn normalized_text_respects_cap_and_strips_markup(s in ".{0,700}") {
        let out = TextNormalizer::default().normalize(&s);
        prop_assert!(out.chars().count() <= 500);
        prop_assert!(!out.contains(['*', '_', '#']));
        prop_assert!(!out.contains("  "));
        prop_assert_eq!(out.trim(), out.as_str());
    }

    #[test]
    fn cached_equals_uncached(s in ".{0,200}") {
        let config = EmbeddingConfig::default();
        let cache = EmbeddingCache::new(Box::new(HashingEmbedder::new(64)), &config);
        let miss = cache.embed(&s).unwrap();
        let hit = cache.embed(&s).unwrap();
        prop_assert_eq!(miss, hit);
    }

    #[test]
    fn every_text_embeds_to_a_unit_vector(s in ".{0,120}") {
        let v = HashingEmbedder::new(64).encode(&s).unwrap();
        let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        prop_assert!((norm - 1.0).abs() < 1e-4, "norm {} for {:?}", norm, s);
    }
}
