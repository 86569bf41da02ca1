use serde::{Deserialize, Serialize};

/// Outcome of one scoring stage.
///
/// `Computed` carries a real measurement, which may itself be neutral when the
/// input holds no signal. `Degraded` carries the neutral fallback that replaced a
/// failed computation, along with the failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StageOutcome<T> {
    Computed { value: T },
    Degraded { value: T, reason: String },
}

impl<T: Copy> StageOutcome<T> {
    pub fn computed(value: T) -> Self {
        Self::Computed { value }
    }

    pub fn degraded(value: T, reason: impl Into<String>) -> Self {
        Self::Degraded {
            value,
            reason: reason.into(),
        }
    }

    /// The value to use downstream, whether measured or substituted.
    pub fn value(&self) -> T {
        match self {
            Self::Computed { value } | Self::Degraded { value, .. } => *value,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// Failure description for degraded outcomes.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Computed { .. } => None,
            Self::Degraded { reason, .. } => Some(reason.as_str()),
        }
    }
}
