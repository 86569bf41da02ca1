//! Tracing setup for the binary. Stdout is reserved for the JSON result, so
//! every log line goes to stderr.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "ACCORD_LOG";

/// Install the global subscriber. `ACCORD_LOG` wins over `default_level`.
pub fn init_logging(default_level: &str) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::try_new(default_level).unwrap_or_else(|_| EnvFilter::new("warn"))
    });

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .try_init();

    if installed.is_ok() {
        tracing::debug!(level = default_level, "logging initialized");
    }
}
