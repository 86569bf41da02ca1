use serde::{Deserialize, Serialize};

use super::defaults;

/// Lexical contradiction heuristics.
///
/// Patterns are regular expressions matched against lower-cased text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContradictionConfig {
    /// Negation pattern families; matches are summed per response.
    pub negation_patterns: Vec<String>,
    /// Disagreement connectives; matches are summed over both responses of a pair.
    pub disagreement_markers: Vec<String>,
    /// A pair is flagged when its negation counts differ by more than this.
    pub negation_asymmetry_threshold: usize,
    /// Signal weight for a negation asymmetry.
    pub negation_weight: f64,
    /// A pair is flagged when its connective count exceeds this.
    pub disagreement_threshold: usize,
    /// Signal weight for a connective excess.
    pub disagreement_weight: f64,
    /// Upper bound on the final penalty.
    pub max_penalty: f64,
}

impl Default for ContradictionConfig {
    fn default() -> Self {
        Self {
            negation_patterns: to_owned(defaults::DEFAULT_NEGATION_PATTERNS),
            disagreement_markers: to_owned(defaults::DEFAULT_DISAGREEMENT_MARKERS),
            negation_asymmetry_threshold: defaults::DEFAULT_NEGATION_ASYMMETRY_THRESHOLD,
            negation_weight: defaults::DEFAULT_NEGATION_WEIGHT,
            disagreement_threshold: defaults::DEFAULT_DISAGREEMENT_THRESHOLD,
            disagreement_weight: defaults::DEFAULT_DISAGREEMENT_WEIGHT,
            max_penalty: defaults::DEFAULT_MAX_PENALTY,
        }
    }
}

fn to_owned(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| p.to_string()).collect()
}
