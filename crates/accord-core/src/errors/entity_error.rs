/// Errors raised by entity recognizers.
#[derive(Debug, thiserror::Error)]
pub enum EntityError {
    #[error("entity extraction failed in {extractor}: {reason}")]
    ExtractionFailed { extractor: String, reason: String },
}
