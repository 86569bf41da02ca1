//! Wire contract: one JSON request on stdin, one JSON document on stdout.

use accord_core::config::AccordConfig;
use accord_core::constants::ALGORITHM_ERROR_TAG;
use accord_core::models::ConsensusResult;
use accord_engine::ConsensusEngine;
use anyhow::Context;
use serde::Serialize;
use serde_json::Value;

/// Why a request could not be turned into a response set.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RequestError {
    #[error("No input provided")]
    Empty,

    #[error("No responses provided")]
    NoResponses,

    #[error("{0}")]
    Malformed(String),
}

/// Extract the response set from raw stdin.
///
/// Input that is not JSON at all becomes a single literal response.
pub fn parse_request(raw: &str) -> Result<Vec<String>, RequestError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(RequestError::Empty);
    }

    let Ok(value) = serde_json::from_str::<Value>(input) else {
        return Ok(vec![input.to_string()]);
    };

    let Value::Object(mut map) = value else {
        return Err(RequestError::Malformed(format!(
            "expected a JSON object with a \"responses\" key, got {}",
            json_kind(&value)
        )));
    };

    let responses = match map.remove("responses") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::String(s) => Ok(s),
                other => Err(RequestError::Malformed(format!(
                    "responses[{i}] must be a string, got {}",
                    json_kind(&other)
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(other) => {
            return Err(RequestError::Malformed(format!(
                "\"responses\" must be an array of strings, got {}",
                json_kind(&other)
            )))
        }
    };

    if responses.is_empty() {
        return Err(RequestError::NoResponses);
    }
    Ok(responses)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Debug, Serialize)]
struct InputErrorPayload<'a> {
    error: &'a str,
}

#[derive(Debug, Serialize)]
struct RuntimeErrorPayload<'a> {
    error: &'a str,
    consensus_score: f64,
    algorithm: &'static str,
}

/// What the process reports for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Scored(ConsensusResult),
    InputError(String),
    RuntimeError(String),
}

impl Outcome {
    pub fn to_json(&self) -> Value {
        let serialized = match self {
            Outcome::Scored(result) => serde_json::to_value(result),
            Outcome::InputError(error) => serde_json::to_value(InputErrorPayload { error }),
            Outcome::RuntimeError(error) => serde_json::to_value(RuntimeErrorPayload {
                error,
                consensus_score: 0.0,
                algorithm: ALGORITHM_ERROR_TAG,
            }),
        };
        // Plain structs with string and number fields always serialize.
        serialized.unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Scored(_))
    }
}

/// Handle one request end to end.
pub fn run(raw: &str, config: &AccordConfig) -> Outcome {
    let responses = match parse_request(raw) {
        Ok(responses) => responses,
        Err(e @ (RequestError::Empty | RequestError::NoResponses)) => {
            return Outcome::InputError(e.to_string())
        }
        Err(RequestError::Malformed(message)) => return Outcome::RuntimeError(message),
    };

    match score(&responses, config) {
        Ok(result) => Outcome::Scored(result.rounded()),
        Err(e) => Outcome::RuntimeError(format!("{e:#}")),
    }
}

fn score(responses: &[String], config: &AccordConfig) -> anyhow::Result<ConsensusResult> {
    let mut engine =
        ConsensusEngine::builtin(config).context("failed to initialize consensus engine")?;
    let report = engine.evaluate(responses);
    for event in engine.drain_degradation_events() {
        tracing::warn!(
            component = %event.component,
            failure = %event.failure,
            fallback = %event.fallback_used,
            "degraded stage"
        );
    }
    Ok(report.result)
}
