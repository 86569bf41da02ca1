use crate::errors::AccordResult;

/// Text embedding provider.
pub trait Embedder: Send + Sync {
    /// Embed a single (already normalized) text.
    ///
    /// Must be deterministic for identical input within one process.
    fn encode(&self, text: &str) -> AccordResult<Vec<f32>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
