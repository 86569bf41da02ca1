use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Output dimension of the built-in hashing embedder.
    pub dimensions: usize,
    /// Character cap applied by the normalizer before embedding.
    pub max_text_chars: usize,
    /// Maximum number of cached embeddings per engine.
    pub cache_capacity: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            max_text_chars: defaults::DEFAULT_MAX_TEXT_CHARS,
            cache_capacity: defaults::DEFAULT_CACHE_CAPACITY,
        }
    }
}
