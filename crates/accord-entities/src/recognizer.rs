//! Regex entity recognizer.
//!
//! Emits the same labels a statistical NER model would for the categories the
//! comparator consumes. Categories are scanned in priority order and a span is
//! dropped when it overlaps one already accepted.

use std::sync::LazyLock;

use accord_core::errors::AccordResult;
use accord_core::models::EntitySpan;
use accord_core::traits::EntityExtractor;
use regex::Regex;

static MONEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:[$€£¥]\s?\d[\d,]*(?:\.\d+)?(?:\s?(?:million|billion|thousand|bn|[mk])\b)?|\b\d[\d,]*(?:\.\d+)?\s?(?:million\s|billion\s)?(?:dollars?|usd|euros?|eur|pounds?|gbp|kronor|sek|kr)\b)",
    )
    .unwrap()
});

static PERCENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\d+(?:\.\d+)?\s?(?:%|percent\b|procent\b)").unwrap()
});

static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:tember)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?|q[1-4])\s+(?:\d{1,2},?\s+)?)?(?:19|20)\d{2}\b",
    )
    .unwrap()
});

static CARDINAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+(?:[.,]\d+)*\b").unwrap());

/// Categories in priority order.
fn categories() -> [(&'static str, &'static LazyLock<Regex>); 4] {
    [
        (EntitySpan::MONEY, &MONEY_RE),
        (EntitySpan::PERCENT, &PERCENT_RE),
        (EntitySpan::DATE, &DATE_RE),
        (EntitySpan::CARDINAL, &CARDINAL_RE),
    ]
}

/// Dependency-free entity recognizer for dates and numeric quantities.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternRecognizer;

impl PatternRecognizer {
    pub fn new() -> Self {
        Self
    }

    fn scan(&self, text: &str) -> Vec<EntitySpan> {
        let mut accepted: Vec<(usize, usize, &'static str)> = Vec::new();

        for (label, regex) in categories() {
            for m in regex.find_iter(text) {
                let overlaps = accepted
                    .iter()
                    .any(|(start, end, _)| m.start() < *end && *start < m.end());
                if !overlaps {
                    accepted.push((m.start(), m.end(), label));
                }
            }
        }

        accepted.sort_by_key(|(start, _, _)| *start);
        accepted
            .into_iter()
            .map(|(start, end, label)| EntitySpan::new(label, text[start..end].trim()))
            .collect()
    }
}

impl EntityExtractor for PatternRecognizer {
    fn extract(&self, text: &str) -> AccordResult<Vec<EntitySpan>> {
        Ok(self.scan(text))
    }

    fn name(&self) -> &str {
        "pattern-recognizer"
    }
}
