//! # accord-contradiction
//!
//! Pairwise lexical contradiction heuristics.
//!
//! Two signals are recorded per response pair:
//! 1. **Negation asymmetry**: one response negates far more than the other
//! 2. **Disagreement connectives**: "however", "but", "tvärtom", ... across the pair
//!
//! The penalty is the mean recorded signal weight, capped so that contradiction
//! alone never zeroes a consensus score.

pub mod detector;
pub mod patterns;

pub use detector::{ContradictionDetector, PairSignal, SignalKind};
