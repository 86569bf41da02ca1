//! Pairwise contradiction detector.

use accord_core::config::ContradictionConfig;
use accord_core::errors::AccordResult;
use tracing::debug;

use crate::patterns::PatternSet;

/// Which heuristic fired for a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    /// Negation counts differ by more than the asymmetry threshold.
    NegationAsymmetry,
    /// The pair holds more disagreement connectives than the threshold.
    Disagreement,
}

/// One recorded contradiction signal for the unordered pair `(i, j)`, `i < j`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairSignal {
    pub pair: (usize, usize),
    pub kind: SignalKind,
    pub weight: f64,
}

/// Lexical contradiction heuristics over every response pair.
#[derive(Debug, Clone)]
pub struct ContradictionDetector {
    negations: PatternSet,
    connectives: PatternSet,
    config: ContradictionConfig,
}

impl ContradictionDetector {
    /// Compile the configured pattern lists.
    pub fn new(config: ContradictionConfig) -> AccordResult<Self> {
        Ok(Self {
            negations: PatternSet::compile(&config.negation_patterns)?,
            connectives: PatternSet::compile(&config.disagreement_markers)?,
            config,
        })
    }

    /// Every signal recorded across all unordered pairs, in pair order.
    pub fn signals(&self, responses: &[String]) -> Vec<PairSignal> {
        let lowered: Vec<String> = responses.iter().map(|r| r.to_lowercase()).collect();
        let negation_counts: Vec<usize> = lowered.iter().map(|r| self.negations.count(r)).collect();
        let connective_counts: Vec<usize> =
            lowered.iter().map(|r| self.connectives.count(r)).collect();

        let mut signals = Vec::new();
        for i in 0..lowered.len() {
            for j in (i + 1)..lowered.len() {
                if negation_counts[i].abs_diff(negation_counts[j])
                    > self.config.negation_asymmetry_threshold
                {
                    signals.push(PairSignal {
                        pair: (i, j),
                        kind: SignalKind::NegationAsymmetry,
                        weight: self.config.negation_weight,
                    });
                }

                let connectives = connective_counts[i] + connective_counts[j];
                if connectives > self.config.disagreement_threshold {
                    signals.push(PairSignal {
                        pair: (i, j),
                        kind: SignalKind::Disagreement,
                        weight: self.config.disagreement_weight,
                    });
                }
            }
        }
        signals
    }

    /// Mean signal weight capped at `max_penalty`; 0.0 when nothing fired.
    pub fn penalty(&self, responses: &[String]) -> f64 {
        let signals = self.signals(responses);
        if signals.is_empty() {
            return 0.0;
        }
        let mean = signals.iter().map(|s| s.weight).sum::<f64>() / signals.len() as f64;
        debug!(signals = signals.len(), mean, "contradiction signals");
        mean.min(self.config.max_penalty)
    }
}
