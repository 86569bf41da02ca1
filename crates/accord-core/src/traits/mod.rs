mod embedder;
mod entity_extractor;

pub use embedder::Embedder;
pub use entity_extractor::EntityExtractor;
