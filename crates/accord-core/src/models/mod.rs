mod consensus_report;
mod consensus_result;
mod degradation_event;
mod entity;
mod stage_outcome;

pub use consensus_report::ConsensusReport;
pub use consensus_result::ConsensusResult;
pub use degradation_event::DegradationEvent;
pub use entity::{EntityFact, EntitySpan, FactKind};
pub use stage_outcome::StageOutcome;
