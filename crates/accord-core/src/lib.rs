//! # accord-core
//!
//! Foundation crate for the Accord consensus scorer.
//! Defines the collaborator traits, shared models, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::AccordConfig;
pub use errors::{AccordError, AccordResult};
pub use models::{ConsensusReport, ConsensusResult, StageOutcome};
pub use traits::{Embedder, EntityExtractor};
