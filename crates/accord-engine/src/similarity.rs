//! Mean pairwise cosine similarity of response embeddings.

use accord_core::constants::UNANIMOUS_SCORE;
use accord_core::errors::{AccordResult, EmbeddingError};
use accord_embeddings::dimensions::validate_batch;
use accord_embeddings::EmbeddingCache;
use tracing::debug;

/// Cosine similarity between two vectors.
/// Returns 0.0 for zero-length or zero-magnitude vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }
    let denom = mag_a.sqrt() * mag_b.sqrt();
    if denom < f64::EPSILON {
        0.0
    } else {
        (dot / denom).clamp(-1.0, 1.0)
    }
}

/// Full `n x n` cosine similarity matrix.
pub fn similarity_matrix(embeddings: &[Vec<f32>]) -> Vec<Vec<f64>> {
    embeddings
        .iter()
        .map(|a| embeddings.iter().map(|b| cosine_similarity(a, b)).collect())
        .collect()
}

/// Mean of the strict upper triangle of a square matrix; 0.0 when it is empty.
pub fn upper_triangle_mean(matrix: &[Vec<f64>]) -> f64 {
    let values: Vec<f64> = matrix
        .iter()
        .enumerate()
        .flat_map(|(i, row)| row.iter().skip(i + 1).copied())
        .collect();
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Base similarity stage, backed by the engine's embedding cache.
pub struct SimilarityScorer {
    cache: EmbeddingCache,
}

impl SimilarityScorer {
    pub fn new(cache: EmbeddingCache) -> Self {
        Self { cache }
    }

    /// Mean pairwise cosine similarity of the responses.
    ///
    /// Fewer than two responses score 1.0. Fails if any embedding fails, if an
    /// embedding misses the embedder's declared dimension, or if the similarity
    /// is not finite.
    pub fn score(&self, responses: &[String]) -> AccordResult<f64> {
        if responses.len() < 2 {
            return Ok(UNANIMOUS_SCORE);
        }

        let embeddings = self.cache.embed_all(responses)?;
        let dims = self.cache.dimensions();
        validate_batch(&embeddings, dims)?;
        let mean = upper_triangle_mean(&similarity_matrix(&embeddings));

        if !mean.is_finite() {
            return Err(EmbeddingError::InferenceFailed {
                reason: "embeddings produced a non-finite similarity".to_string(),
            }
            .into());
        }

        debug!(responses = responses.len(), dims, mean, "base similarity");
        Ok(mean)
    }

    pub fn cache(&self) -> &EmbeddingCache {
        &self.cache
    }
}
