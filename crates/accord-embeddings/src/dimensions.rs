//! Dimension checks for embeddings produced within one scoring call.

use accord_core::errors::{AccordResult, EmbeddingError};

/// Validate that an embedding has the expected dimensions.
///
/// # Errors
/// Returns `DimensionMismatch` if dimensions don't match.
pub fn validate_dimensions(embedding: &[f32], expected: usize) -> AccordResult<()> {
    if embedding.len() != expected {
        return Err(EmbeddingError::DimensionMismatch {
            expected,
            actual: embedding.len(),
        }
        .into());
    }
    Ok(())
}

/// Check every embedding of a batch against the embedder's declared dimension.
pub fn validate_batch(embeddings: &[Vec<f32>], expected: usize) -> AccordResult<()> {
    embeddings
        .iter()
        .try_for_each(|embedding| validate_dimensions(embedding, expected))
}
