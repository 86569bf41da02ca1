use serde::{Deserialize, Serialize};

use super::defaults;

/// Entity comparison weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityConfig {
    /// Weight of year agreement in the entity bonus.
    pub date_weight: f64,
    /// Weight of generic numeric agreement in the entity bonus.
    pub number_weight: f64,
    /// Largest multiplicative bonus the comparator may add on top of 1.0.
    pub max_bonus: f64,
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            date_weight: defaults::DEFAULT_DATE_WEIGHT,
            number_weight: defaults::DEFAULT_NUMBER_WEIGHT,
            max_bonus: defaults::DEFAULT_MAX_ENTITY_BONUS,
        }
    }
}
