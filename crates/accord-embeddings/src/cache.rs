//! Per-engine embedding cache using moka.
//!
//! Keys are derived from the raw (pre-normalization) response text; values are
//! embedding vectors. The cache is size-capped and can be cleared explicitly,
//! but it has no TTL: entries live as long as the owning engine.

use accord_core::config::EmbeddingConfig;
use accord_core::constants::CACHE_KEY_PREFIX_CHARS;
use accord_core::errors::AccordResult;
use accord_core::traits::Embedder;
use moka::sync::Cache;
use tracing::debug;

use crate::normalizer::TextNormalizer;

/// Cache key for a raw text: its first 100 characters, `_`, and its character count.
///
/// Two distinct texts that share both the prefix and the length collide.
pub fn cache_key(text: &str) -> String {
    let prefix: String = text.chars().take(CACHE_KEY_PREFIX_CHARS).collect();
    format!("{prefix}_{}", text.chars().count())
}

/// Memoizing front for an [`Embedder`].
///
/// Misses normalize the text and call the embedder; hits return the stored
/// vector without touching either.
pub struct EmbeddingCache {
    embedder: Box<dyn Embedder>,
    normalizer: TextNormalizer,
    cache: Cache<String, Vec<f32>>,
}

impl EmbeddingCache {
    pub fn new(embedder: Box<dyn Embedder>, config: &EmbeddingConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .build();

        Self {
            embedder,
            normalizer: TextNormalizer::new(config.max_text_chars),
            cache,
        }
    }

    /// Embed one raw response.
    ///
    /// Embedder failures are returned as-is and nothing is cached.
    pub fn embed(&self, text: &str) -> AccordResult<Vec<f32>> {
        let key = cache_key(text);
        if let Some(vec) = self.cache.get(&key) {
            debug!(key_len = key.len(), "embedding cache hit");
            return Ok(vec);
        }

        let clean = self.normalizer.normalize(text);
        let embedding = self.embedder.encode(&clean)?;
        self.cache.insert(key, embedding.clone());
        Ok(embedding)
    }

    /// Embed every response, preserving order. Stops at the first failure.
    pub fn embed_all(&self, texts: &[String]) -> AccordResult<Vec<Vec<f32>>> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    /// Number of entries currently in the cache.
    pub fn len(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }

    pub fn embedder_name(&self) -> &str {
        self.embedder.name()
    }

    /// Dimension the embedder declares for every vector.
    pub fn dimensions(&self) -> usize {
        self.embedder.dimensions()
    }
}
