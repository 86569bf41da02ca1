use serde::{Deserialize, Serialize};

use crate::constants::{ALGORITHM_TAG, SCORE_DECIMALS};

/// The final record handed back to a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusResult {
    /// Consensus score in [0, 1].
    #[serde(rename = "consensus_score")]
    pub score: f64,
    /// Tag identifying the scoring algorithm.
    pub algorithm: String,
    /// Number of responses that were scored.
    #[serde(rename = "num_responses")]
    pub response_count: usize,
}

impl ConsensusResult {
    /// Build a result for the standard algorithm. The score is clamped to [0, 1].
    pub fn new(score: f64, response_count: usize) -> Self {
        Self {
            score: score.clamp(0.0, 1.0),
            algorithm: ALGORITHM_TAG.to_string(),
            response_count,
        }
    }

    /// Copy of this result with the score rounded for the wire.
    pub fn rounded(&self) -> Self {
        let scale = 10f64.powi(SCORE_DECIMALS);
        Self {
            score: (self.score * scale).round() / scale,
            ..self.clone()
        }
    }
}
