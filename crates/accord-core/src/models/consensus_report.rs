use serde::{Deserialize, Serialize};

use super::{ConsensusResult, StageOutcome};

/// A consensus result together with the outcome of each stage that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusReport {
    pub result: ConsensusResult,
    pub base_similarity: StageOutcome<f64>,
    pub entity_adjustment: StageOutcome<f64>,
    pub contradiction_penalty: StageOutcome<f64>,
}

impl ConsensusReport {
    /// Whether any stage fell back to its neutral value.
    pub fn is_degraded(&self) -> bool {
        self.base_similarity.is_degraded()
            || self.entity_adjustment.is_degraded()
            || self.contradiction_penalty.is_degraded()
    }

    pub fn score(&self) -> f64 {
        self.result.score
    }
}
