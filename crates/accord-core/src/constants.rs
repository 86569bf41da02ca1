/// Algorithm tag reported with every successful score.
pub const ALGORITHM_TAG: &str = "semantic_embedding";

/// Algorithm tag reported when scoring could not run at all.
pub const ALGORITHM_ERROR_TAG: &str = "semantic_embedding_error";

/// Number of leading characters of the raw text that go into an embedding cache key.
pub const CACHE_KEY_PREFIX_CHARS: usize = 100;

/// Decimal places kept in the score written to the wire.
pub const SCORE_DECIMALS: i32 = 4;

/// Score returned for response sets with fewer than two members.
pub const UNANIMOUS_SCORE: f64 = 1.0;
