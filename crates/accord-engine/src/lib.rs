//! # accord-engine
//!
//! Composition root for consensus scoring.
//!
//! `final = base_similarity * entity_adjustment * (1 - contradiction_penalty)`,
//! clamped to [0, 1]. Every stage failure is absorbed into a neutral value and
//! reported through [`StageOutcome`](accord_core::StageOutcome).

pub mod engine;
pub mod similarity;

pub use engine::ConsensusEngine;
pub use similarity::SimilarityScorer;
