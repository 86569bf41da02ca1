//! # accord-embeddings
//!
//! Everything between a raw response and its embedding vector:
//! markup-stripping normalization, a per-engine cache keyed on the raw text,
//! dimension checks, and a dependency-free hashing embedder.

pub mod cache;
pub mod dimensions;
pub mod normalizer;
pub mod providers;

pub use cache::EmbeddingCache;
pub use normalizer::TextNormalizer;
pub use providers::HashingEmbedder;
