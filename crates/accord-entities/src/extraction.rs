//! Fact extraction from labelled spans.

use std::sync::LazyLock;

use accord_core::models::{EntityFact, EntitySpan, FactKind};
use regex::Regex;

/// A 20xx year anywhere inside a date span.
static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"20\d{2}").unwrap());

/// First run of digits and dots. A leading dot is part of the number (`.5`).
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\d.]+").unwrap());

/// Facts of one response, split the way they are compared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseFacts {
    pub years: Vec<f64>,
    pub numbers: Vec<f64>,
}

impl ResponseFacts {
    pub fn from_facts(facts: &[EntityFact]) -> Self {
        let mut out = Self::default();
        for fact in facts {
            if fact.kind.is_temporal() {
                out.years.push(fact.value);
            } else {
                out.numbers.push(fact.value);
            }
        }
        out
    }
}

/// Year in 2000–2099 from a date span, if any.
pub fn extract_year(text: &str) -> Option<f64> {
    YEAR_RE.find(text).and_then(|m| m.as_str().parse::<u32>().ok()).map(f64::from)
}

/// First run of digits and dots in a span, parsed as a number.
///
/// The first run decides: a bare `.` or a malformed `1.2.3` yields `None`
/// even if a well-formed number follows.
pub fn extract_number(text: &str) -> Option<f64> {
    NUMBER_RE.find(text).and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Convert recognizer spans into facts, in span order.
///
/// Spans with unknown labels, date spans without a 20xx year, and unparsable
/// numbers contribute nothing.
pub fn facts_from_spans(spans: &[EntitySpan]) -> Vec<EntityFact> {
    spans
        .iter()
        .filter_map(|span| {
            let kind = FactKind::from_label(&span.label)?;
            let value = if kind.is_temporal() {
                extract_year(&span.text)?
            } else {
                extract_number(&span.text)?
            };
            Some(EntityFact { kind, value })
        })
        .collect()
}
