//! Compiled pattern families.

use accord_core::errors::{AccordResult, ConfigError};
use regex::Regex;

/// A list of regexes whose matches are counted together.
#[derive(Debug, Clone)]
pub struct PatternSet {
    regexes: Vec<Regex>,
}

impl PatternSet {
    /// Compile every pattern, failing on the first invalid one.
    pub fn compile(patterns: &[String]) -> AccordResult<Self> {
        let regexes = patterns
            .iter()
            .map(|p| {
                Regex::new(p).map_err(|e| ConfigError::InvalidPattern {
                    pattern: p.clone(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { regexes })
    }

    /// Total non-overlapping matches of all patterns in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.regexes.iter().map(|re| re.find_iter(text).count()).sum()
    }
}
