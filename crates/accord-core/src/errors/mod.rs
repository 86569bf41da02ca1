//! Error taxonomy for Accord.
//!
//! Each concern has its own enum; all of them fold into [`AccordError`].

mod config_error;
mod embedding_error;
mod entity_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use entity_error::EntityError;

/// Result alias used across the workspace.
pub type AccordResult<T> = Result<T, AccordError>;

/// Top-level error for every Accord crate.
#[derive(Debug, thiserror::Error)]
pub enum AccordError {
    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("entity error: {0}")]
    EntityError(#[from] EntityError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),
}
