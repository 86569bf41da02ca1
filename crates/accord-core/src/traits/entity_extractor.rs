use crate::errors::AccordResult;
use crate::models::EntitySpan;

/// Named-entity recognizer.
pub trait EntityExtractor: Send + Sync {
    /// Extract labelled spans from a raw text, in text order.
    fn extract(&self, text: &str) -> AccordResult<Vec<EntitySpan>>;

    /// Human-readable recognizer name.
    fn name(&self) -> &str;
}
