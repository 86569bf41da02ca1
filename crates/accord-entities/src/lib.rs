//! # accord-entities
//!
//! Turns recognizer spans into numeric facts and scores how well the facts of
//! different responses agree.
//!
//! ## Pipeline
//! 1. **Recognition**: an [`EntityExtractor`](accord_core::traits::EntityExtractor)
//!    labels spans (`DATE`, `CARDINAL`, `PERCENT`, `MONEY`, ...)
//! 2. **Extraction**: years from date spans, first numbers from numeric spans
//! 3. **Comparison**: best-match relative difference per response pair
//! 4. **Adjustment**: weighted bonus mapped to a multiplier in [1.0, 1.5]

pub mod comparator;
pub mod extraction;
pub mod numeric;
pub mod recognizer;

pub use comparator::EntityComparator;
pub use recognizer::PatternRecognizer;
