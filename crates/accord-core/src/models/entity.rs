use serde::{Deserialize, Serialize};

/// One labelled span produced by an entity recognizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    /// Category label, e.g. `DATE` or `PERCENT`.
    pub label: String,
    /// The span's surface text.
    pub text: String,
}

impl EntitySpan {
    pub const DATE: &'static str = "DATE";
    pub const CARDINAL: &'static str = "CARDINAL";
    pub const PERCENT: &'static str = "PERCENT";
    pub const MONEY: &'static str = "MONEY";

    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Kind of fact extracted from a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactKind {
    /// A 20xx year taken from a date span.
    Year,
    Cardinal,
    Percent,
    Money,
}

impl FactKind {
    /// Map a recognizer label to the fact kind it feeds. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            EntitySpan::DATE => Some(Self::Year),
            EntitySpan::CARDINAL => Some(Self::Cardinal),
            EntitySpan::PERCENT => Some(Self::Percent),
            EntitySpan::MONEY => Some(Self::Money),
            _ => None,
        }
    }

    /// Whether facts of this kind are compared as dates rather than generic numbers.
    pub fn is_temporal(self) -> bool {
        matches!(self, Self::Year)
    }
}

/// A numeric fact extracted from one response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityFact {
    pub kind: FactKind,
    pub value: f64,
}
