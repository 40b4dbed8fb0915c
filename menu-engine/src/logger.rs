//! Logging Infrastructure
//!
//! Console logging for frontends embedding the engine. `RUST_LOG` overrides
//! the configured level.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize the global subscriber
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "menu_engine=trace")
/// * `json_format` - JSON lines instead of human-readable output
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    let subscriber = tracing_subscriber::registry().with(env_filter);

    let result = if json_format {
        subscriber
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
    } else {
        subscriber
            .with(fmt::layer().with_target(true).with_line_number(true))
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("Global subscriber already installed, keeping it");
    }

    Ok(())
}

/// Initialize logging from a [`crate::Config`]
pub fn init_from_config(config: &crate::Config) -> anyhow::Result<()> {
    init_logger(&config.log_level, config.log_json)
}
