//! `accord`: reads `{"responses": [...]}` from stdin and prints the consensus
//! score as JSON on stdout.

mod logging;
mod wire;

use std::io::Read;
use std::process::ExitCode;

use accord_core::config::AccordConfig;
use anyhow::Context;

use crate::wire::Outcome;

/// Environment variable naming an optional TOML config file.
const CONFIG_ENV: &str = "ACCORD_CONFIG";

fn load_config() -> anyhow::Result<AccordConfig> {
    let Some(path) = std::env::var_os(CONFIG_ENV) else {
        return Ok(AccordConfig::default());
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file {}", path.to_string_lossy()))?;
    AccordConfig::from_toml(&text)
        .with_context(|| format!("invalid config file {}", path.to_string_lossy()))
}

fn read_stdin() -> anyhow::Result<String> {
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("failed to read standard input")?;
    Ok(raw)
}

fn execute() -> Outcome {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            logging::init_logging(accord_core::config::defaults::DEFAULT_LOG_LEVEL);
            return Outcome::RuntimeError(format!("{e:#}"));
        }
    };
    logging::init_logging(&config.observability.log_level);

    match read_stdin() {
        Ok(raw) => wire::run(&raw, &config),
        Err(e) => Outcome::RuntimeError(format!("{e:#}")),
    }
}

fn main() -> ExitCode {
    let outcome = execute();
    if let Outcome::RuntimeError(message) = &outcome {
        tracing::error!(error = %message, "consensus measurement failed");
    }
    println!("{}", outcome.to_json());

    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
