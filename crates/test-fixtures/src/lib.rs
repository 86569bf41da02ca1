//! Test fixtures for Accord: deterministic stub collaborators and golden
//! consensus scenarios shared by tests across crates.

mod stubs;

pub use stubs::{
    CountingEmbedder, FailingEmbedder, FailingExtractor, StubEmbedder, TableEmbedder,
    TableExtractor,
};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the golden fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// One end-to-end scenario scored with the built-in collaborators.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsensusScenario {
    pub name: String,
    pub responses: Vec<String>,
    /// Inclusive lower bound on the expected score.
    pub min_score: f64,
    /// Inclusive upper bound on the expected score.
    pub max_score: f64,
}

/// Load every scenario from `consensus_scenarios.json`.
pub fn consensus_scenarios() -> Vec<ConsensusScenario> {
    load_fixture("consensus_scenarios.json")
}
