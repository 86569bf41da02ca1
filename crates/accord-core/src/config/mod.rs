//! Configuration for every Accord stage.
//!
//! All sections use `#[serde(default)]`, so an empty TOML document yields the
//! reference behaviour.

mod contradiction_config;
pub mod defaults;
mod embedding_config;
mod entity_config;
mod observability_config;

pub use contradiction_config::ContradictionConfig;
pub use embedding_config::EmbeddingConfig;
pub use entity_config::EntityConfig;
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{AccordResult, ConfigError};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccordConfig {
    pub embedding: EmbeddingConfig,
    pub entities: EntityConfig,
    pub contradiction: ContradictionConfig,
    pub observability: ObservabilityConfig,
}

impl AccordConfig {
    /// Parse a TOML document and validate the result.
    pub fn from_toml(toml_str: &str) -> AccordResult<Self> {
        let config: AccordConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseFailed {
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> AccordResult<String> {
        toml::to_string(self).map_err(|e| {
            ConfigError::ParseFailed {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> AccordResult<()> {
        let e = &self.embedding;
        if e.dimensions == 0 {
            return Err(invalid("embedding.dimensions", "must be greater than zero"));
        }
        if e.max_text_chars == 0 {
            return Err(invalid("embedding.max_text_chars", "must be greater than zero"));
        }
        if e.cache_capacity == 0 {
            return Err(invalid("embedding.cache_capacity", "must be greater than zero"));
        }

        let n = &self.entities;
        for (field, value) in [
            ("entities.date_weight", n.date_weight),
            ("entities.number_weight", n.number_weight),
            ("entities.max_bonus", n.max_bonus),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, "must be a finite non-negative number"));
            }
        }

        let c = &self.contradiction;
        for (field, value) in [
            ("contradiction.negation_weight", c.negation_weight),
            ("contradiction.disagreement_weight", c.disagreement_weight),
            ("contradiction.max_penalty", c.max_penalty),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, "must lie in [0, 1]"));
            }
        }

        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> crate::errors::AccordError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
