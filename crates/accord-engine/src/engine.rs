//! ConsensusEngine: the main entry point for accord-engine.
//!
//! Owns the three scoring stages and the embedding cache they share with the
//! caller's lifetime. Failures in any stage degrade to that stage's neutral
//! value instead of propagating.

use accord_contradiction::ContradictionDetector;
use accord_core::config::AccordConfig;
use accord_core::constants::UNANIMOUS_SCORE;
use accord_core::errors::AccordResult;
use accord_core::models::{ConsensusReport, ConsensusResult, DegradationEvent, StageOutcome};
use accord_core::traits::{Embedder, EntityExtractor};
use accord_embeddings::{EmbeddingCache, HashingEmbedder};
use accord_entities::{EntityComparator, PatternRecognizer};
use tracing::{debug, info, info_span, warn};

use crate::similarity::SimilarityScorer;

/// Neutral values substituted for failed stages.
const NEUTRAL_SIMILARITY: f64 = 0.0;
const NEUTRAL_ADJUSTMENT: f64 = 1.0;
const NEUTRAL_PENALTY: f64 = 0.0;

/// Consensus scorer over a set of free-text responses.
///
/// One engine serves one caller at a time; its embedding cache persists across
/// calls on the same instance.
pub struct ConsensusEngine {
    similarity: SimilarityScorer,
    entities: EntityComparator,
    contradictions: ContradictionDetector,
    /// Accumulated degradation events since the last drain.
    events: Vec<DegradationEvent>,
}

impl ConsensusEngine {
    /// Create an engine around the given collaborators.
    ///
    /// Fails only on invalid configuration (e.g. an uncompilable contradiction pattern).
    pub fn new(
        embedder: Box<dyn Embedder>,
        extractor: Box<dyn EntityExtractor>,
        config: &AccordConfig,
    ) -> AccordResult<Self> {
        config.validate()?;
        let contradictions = ContradictionDetector::new(config.contradiction.clone())?;
        let cache = EmbeddingCache::new(embedder, &config.embedding);
        let entities = EntityComparator::new(extractor, config.entities.clone());

        info!(
            embedder = cache.embedder_name(),
            extractor = entities.extractor_name(),
            cache_capacity = config.embedding.cache_capacity,
            "ConsensusEngine initialized"
        );

        Ok(Self {
            similarity: SimilarityScorer::new(cache),
            entities,
            contradictions,
            events: Vec::new(),
        })
    }

    /// Create an engine with the built-in hashing embedder and pattern recognizer.
    pub fn builtin(config: &AccordConfig) -> AccordResult<Self> {
        Self::new(
            Box::new(HashingEmbedder::new(config.embedding.dimensions)),
            Box::new(PatternRecognizer::new()),
            config,
        )
    }

    /// Consensus score in [0, 1]. Never fails.
    pub fn measure_consensus(&mut self, responses: &[String]) -> f64 {
        self.evaluate(responses).score()
    }

    /// Score a response set and report how each stage fared.
    pub fn evaluate(&mut self, responses: &[String]) -> ConsensusReport {
        let span = info_span!("accord.consensus", responses = responses.len());
        let _guard = span.enter();

        if responses.len() < 2 {
            return ConsensusReport {
                result: ConsensusResult::new(UNANIMOUS_SCORE, responses.len()),
                base_similarity: StageOutcome::computed(UNANIMOUS_SCORE),
                entity_adjustment: StageOutcome::computed(NEUTRAL_ADJUSTMENT),
                contradiction_penalty: StageOutcome::computed(NEUTRAL_PENALTY),
            };
        }

        let base_similarity = self.similarity_stage(responses);
        if base_similarity.is_degraded() {
            // Without a similarity there is nothing to adjust.
            let skipped = "skipped: similarity stage failed";
            return ConsensusReport {
                result: ConsensusResult::new(NEUTRAL_SIMILARITY, responses.len()),
                base_similarity,
                entity_adjustment: StageOutcome::degraded(NEUTRAL_ADJUSTMENT, skipped),
                contradiction_penalty: StageOutcome::degraded(NEUTRAL_PENALTY, skipped),
            };
        }

        let entity_adjustment = self.entity_stage(responses);
        let contradiction_penalty = self.contradiction_stage(responses);

        let combined = base_similarity.value()
            * entity_adjustment.value()
            * (1.0 - contradiction_penalty.value());
        let result = ConsensusResult::new(combined, responses.len());

        debug!(
            base = base_similarity.value(),
            adjustment = entity_adjustment.value(),
            penalty = contradiction_penalty.value(),
            score = result.score,
            "consensus computed"
        );

        ConsensusReport {
            result,
            base_similarity,
            entity_adjustment,
            contradiction_penalty,
        }
    }

    fn similarity_stage(&mut self, responses: &[String]) -> StageOutcome<f64> {
        match self.similarity.score(responses) {
            Ok(value) => StageOutcome::computed(value),
            Err(e) => self.degrade("similarity", NEUTRAL_SIMILARITY, e.to_string()),
        }
    }

    fn entity_stage(&mut self, responses: &[String]) -> StageOutcome<f64> {
        match self.entities.adjust(responses) {
            Ok(value) => StageOutcome::computed(value),
            Err(e) => self.degrade("entities", NEUTRAL_ADJUSTMENT, e.to_string()),
        }
    }

    fn contradiction_stage(&mut self, responses: &[String]) -> StageOutcome<f64> {
        let penalty = self.contradictions.penalty(responses);
        if penalty.is_finite() {
            StageOutcome::computed(penalty)
        } else {
            self.degrade(
                "contradiction",
                NEUTRAL_PENALTY,
                format!("non-finite penalty {penalty}"),
            )
        }
    }

    fn degrade(&mut self, component: &str, neutral: f64, failure: String) -> StageOutcome<f64> {
        warn!(component, error = %failure, fallback = neutral, "stage degraded to neutral value");
        self.events
            .push(DegradationEvent::now(component, failure.clone(), neutral.to_string()));
        StageOutcome::degraded(neutral, failure)
    }

    /// Drain accumulated degradation events.
    pub fn drain_degradation_events(&mut self) -> Vec<DegradationEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drop every cached embedding.
    pub fn clear_cache(&self) {
        self.similarity.cache().clear();
    }

    /// Number of cached embeddings.
    pub fn cache_len(&self) -> u64 {
        self.similarity.cache().len()
    }
}
