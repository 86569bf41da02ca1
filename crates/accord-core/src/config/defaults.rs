//! Default values for every config field.

// Embedding
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_MAX_TEXT_CHARS: usize = 500;
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

// Entities
pub const DEFAULT_DATE_WEIGHT: f64 = 0.6;
pub const DEFAULT_NUMBER_WEIGHT: f64 = 0.4;
pub const DEFAULT_MAX_ENTITY_BONUS: f64 = 0.5;

// Contradiction
pub const DEFAULT_NEGATION_PATTERNS: &[&str] = &[
    r"\b(not|inte|aldrig|never|no|nej)\b",
    r"\b(impossible|omöjligt|unlikely|osannolikt)\b",
    r"\b(disagree|håller inte med|motsätter)\b",
];
pub const DEFAULT_DISAGREEMENT_MARKERS: &[&str] = &[
    r"\bhowever\b",
    r"\bbut\b",
    r"\bmen\b",
    r"\bdock\b",
    r"\bon the contrary\b",
    r"\btvärtom\b",
];
pub const DEFAULT_NEGATION_ASYMMETRY_THRESHOLD: usize = 2;
pub const DEFAULT_NEGATION_WEIGHT: f64 = 0.5;
pub const DEFAULT_DISAGREEMENT_THRESHOLD: usize = 1;
pub const DEFAULT_DISAGREEMENT_WEIGHT: f64 = 0.3;
pub const DEFAULT_MAX_PENALTY: f64 = 0.8;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "warn";
