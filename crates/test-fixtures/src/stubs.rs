//! Stub `Embedder` and `EntityExtractor` implementations.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use accord_core::errors::{AccordResult, EmbeddingError, EntityError};
use accord_core::models::EntitySpan;
use accord_core::traits::{Embedder, EntityExtractor};

/// Deterministic embedder seeded by the blake3 hash of the text.
///
/// Distinct texts get unrelated vectors; identical texts get identical ones.
pub struct StubEmbedder {
    dims: usize,
}

impl StubEmbedder {
    /// `dims` is capped at 32, the width of a blake3 digest.
    pub fn new(dims: usize) -> Self {
        Self { dims: dims.min(32) }
    }
}

impl Embedder for StubEmbedder {
    fn encode(&self, text: &str) -> AccordResult<Vec<f32>> {
        let hash = blake3::hash(text.as_bytes());
        let bytes = hash.as_bytes();
        Ok((0..self.dims).map(|i| bytes[i] as f32 / 255.0).collect())
    }
    fn dimensions(&self) -> usize {
        self.dims
    }
    fn name(&self) -> &str {
        "stub-blake3"
    }
}

/// Wraps another embedder and counts `encode` calls.
pub struct CountingEmbedder<E> {
    inner: E,
    calls: Arc<AtomicUsize>,
}

impl<E: Embedder> CountingEmbedder<E> {
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared handle to the call counter; stays valid after the embedder is boxed.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl<E: Embedder> Embedder for CountingEmbedder<E> {
    fn encode(&self, text: &str) -> AccordResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.encode(text)
    }
    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }
    fn name(&self) -> &str {
        "counting"
    }
}

/// An embedder that always fails.
pub struct FailingEmbedder;

impl Embedder for FailingEmbedder {
    fn encode(&self, _text: &str) -> AccordResult<Vec<f32>> {
        Err(EmbeddingError::InferenceFailed {
            reason: "mock failure".to_string(),
        }
        .into())
    }
    fn dimensions(&self) -> usize {
        0
    }
    fn name(&self) -> &str {
        "failing-mock"
    }
}

/// Embedder answering from a fixed table keyed by normalized text.
///
/// Unknown texts fail, which makes unexpected lookups visible in tests. The
/// declared dimension is the first entry's length unless overridden.
pub struct TableEmbedder {
    table: HashMap<String, Vec<f32>>,
    dims: usize,
}

impl TableEmbedder {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>,
    {
        let entries: Vec<(String, Vec<f32>)> =
            entries.into_iter().map(|(k, v)| (k.into(), v)).collect();
        let dims = entries.first().map_or(0, |(_, v)| v.len());
        Self {
            table: entries.into_iter().collect(),
            dims,
        }
    }

    /// Declare a dimension regardless of the table's vectors.
    pub fn declaring(mut self, dims: usize) -> Self {
        self.dims = dims;
        self
    }
}

impl Embedder for TableEmbedder {
    fn encode(&self, text: &str) -> AccordResult<Vec<f32>> {
        self.table.get(text).cloned().ok_or_else(|| {
            EmbeddingError::InferenceFailed {
                reason: format!("no table entry for '{text}'"),
            }
            .into()
        })
    }
    fn dimensions(&self) -> usize {
        self.dims
    }
    fn name(&self) -> &str {
        "table"
    }
}

/// Extractor answering from a fixed table keyed by raw text.
///
/// Unknown texts yield no spans.
#[derive(Default)]
pub struct TableExtractor {
    table: HashMap<String, Vec<EntitySpan>>,
}

impl TableExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the spans for one text. Each span is `(label, text)`.
    pub fn with(mut self, text: &str, spans: &[(&str, &str)]) -> Self {
        self.table.insert(
            text.to_string(),
            spans
                .iter()
                .map(|(label, span)| EntitySpan::new(*label, *span))
                .collect(),
        );
        self
    }
}

impl EntityExtractor for TableExtractor {
    fn extract(&self, text: &str) -> AccordResult<Vec<EntitySpan>> {
        Ok(self.table.get(text).cloned().unwrap_or_default())
    }
    fn name(&self) -> &str {
        "table"
    }
}

/// An extractor that always fails.
pub struct FailingExtractor;

impl EntityExtractor for FailingExtractor {
    fn extract(&self, _text: &str) -> AccordResult<Vec<EntitySpan>> {
        Err(EntityError::ExtractionFailed {
            extractor: "failing-mock".to_string(),
            reason: "mock failure".to_string(),
        }
        .into())
    }
    fn name(&self) -> &str {
        "failing-mock"
    }
}
