//! # Logging Setup
//!
//! Installs the process-wide logger for the `shopping-list` binary. Library
//! code only emits through the `log` facade; this module picks the backend.
//!
//! - `LOG_FORMAT=text` (default): `env_logger`, human readable, filtered by `RUST_LOG`.
//!   `tracing` events are emitted as `log` records since no subscriber is installed
//! - `LOG_FORMAT=json`: `tracing-subscriber` JSON lines, filtered by `RUST_LOG`,
//!   with `log` records bridged into tracing
//!
//! Both backends write to stderr so stdout stays free for the shopping list.

use anyhow::{Context, Result};
use std::env;
use std::io;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Plain text through `env_logger`
    #[default]
    Text,
    /// JSON lines through `tracing-subscriber`
    Json,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, anything unrecognized falls back to text
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }

    /// Read the format from the environment
    pub fn from_env() -> Self {
        env::var(LOG_FORMAT_VAR)
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }
}

/// Initialize the global logger in the requested format
pub fn init_logging(format: LogFormat) -> Result<()> {
    match format {
        LogFormat::Text => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
                .target(env_logger::Target::Stderr)
                .try_init()
                .context("Failed to initialize env_logger")?;
        }
        LogFormat::Json => {
            let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            let json_layer = fmt::layer()
                .with_target(true)
                .with_writer(io::stderr)
                .json();

            tracing_subscriber::registry()
                .with(filter)
                .with(json_layer)
                .try_init()
                .context("Failed to initialize tracing subscriber")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_format() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Text);
        assert_eq!(LogFormat::default(), LogFormat::Text);
    }
}
