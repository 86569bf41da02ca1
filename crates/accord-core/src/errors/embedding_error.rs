/// Errors raised while producing embeddings.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("embedding inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
