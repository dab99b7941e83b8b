//! # Logging
//!
//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set; otherwise the configured log level applies to
//! this crate. Output is plain text or JSON lines.

use crate::config::ProviderConfig;
use crate::constants::DEFAULT_LOG_FILTER;
use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Filter directive for the configured level, e.g. `provider_aws=debug`
#[must_use]
pub fn filter_directive(log_level: &str) -> String {
    let level = log_level.trim().to_lowercase();
    match level.as_str() {
        "error" | "warn" | "info" | "debug" | "trace" => format!("provider_aws={level}"),
        _ => DEFAULT_LOG_FILTER.to_string(),
    }
}

/// Install the global tracing subscriber
pub fn init_logging(config: &ProviderConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(&config.log_level)));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = match LogFormat::parse(&config.log_format) {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    result.map_err(|e| anyhow!("Failed to initialize tracing subscriber: {e}"))
}
