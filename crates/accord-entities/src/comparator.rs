//! Entity comparison stage: facts in, multiplicative adjustment out.

use accord_core::config::EntityConfig;
use accord_core::errors::AccordResult;
use accord_core::models::EntityFact;
use accord_core::traits::EntityExtractor;
use tracing::debug;

use crate::extraction::{facts_from_spans, ResponseFacts};
use crate::numeric::numeric_similarity;

/// Rewards responses whose years and numbers agree.
///
/// The adjustment is `1 + max_bonus * (date_weight * date_sim + number_weight * number_sim)`,
/// which with default weights lies in [1.0, 1.5].
pub struct EntityComparator {
    extractor: Box<dyn EntityExtractor>,
    config: EntityConfig,
}

impl EntityComparator {
    pub fn new(extractor: Box<dyn EntityExtractor>, config: EntityConfig) -> Self {
        Self { extractor, config }
    }

    /// Run the recognizer over every response and return each response's facts.
    ///
    /// Fails if the recognizer fails on any response.
    pub fn extract_all(&self, responses: &[String]) -> AccordResult<Vec<Vec<EntityFact>>> {
        responses
            .iter()
            .map(|r| -> AccordResult<Vec<EntityFact>> {
                let spans = self.extractor.extract(r)?;
                Ok(facts_from_spans(&spans))
            })
            .collect()
    }

    /// Multiplicative adjustment for a response set.
    pub fn adjust(&self, responses: &[String]) -> AccordResult<f64> {
        let facts = self.extract_all(responses)?;
        Ok(self.adjustment_from_facts(&facts))
    }

    /// Adjustment for already extracted facts.
    pub fn adjustment_from_facts(&self, facts: &[Vec<EntityFact>]) -> f64 {
        let split: Vec<ResponseFacts> =
            facts.iter().map(|f| ResponseFacts::from_facts(f)).collect();
        let years: Vec<Vec<f64>> = split.iter().map(|f| f.years.clone()).collect();
        let numbers: Vec<Vec<f64>> = split.iter().map(|f| f.numbers.clone()).collect();

        let date_similarity = numeric_similarity(&years);
        let number_similarity = numeric_similarity(&numbers);
        let bonus = self.config.date_weight * date_similarity
            + self.config.number_weight * number_similarity;

        debug!(date_similarity, number_similarity, bonus, "entity comparison");
        1.0 + bonus * self.config.max_bonus
    }

    pub fn extractor_name(&self) -> &str {
        self.extractor.name()
    }
}
