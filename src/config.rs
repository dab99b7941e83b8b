//! # Provider Configuration
//!
//! Provider-level settings loaded from environment variables, or from a
//! YAML file when one is given.

use crate::constants::{DEFAULT_LOG_FORMAT, DEFAULT_LOG_LEVEL, ENV_LIST_SEPARATOR};
use crate::tags::IgnoreTagsConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;

/// Provider-level configuration
///
/// All settings have defaults and can be overridden via environment
/// variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderConfig {
    /// AWS region; falls back to the SDK default chain when unset
    pub region: Option<String>,
    /// Caller account id; resolved through STS GetCallerIdentity when unset
    pub account_id: Option<String>,
    /// Endpoint override for the VPC Lattice API (local testing)
    pub vpclattice_endpoint: Option<String>,
    /// Tags never written to state
    pub ignore_tags: IgnoreTagsConfig,
    /// Global log level (ERROR, WARN, INFO, DEBUG, TRACE)
    pub log_level: String,
    /// Log format (json, text)
    pub log_format: String,
    /// Enable metrics collection
    pub enable_metrics: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            region: None,
            account_id: None,
            vpclattice_endpoint: None,
            ignore_tags: IgnoreTagsConfig::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: DEFAULT_LOG_FORMAT.to_string(),
            enable_metrics: true,
        }
    }
}

impl ProviderConfig {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            region: env_var_opt("AWS_REGION").or_else(|| env_var_opt("AWS_DEFAULT_REGION")),
            account_id: env_var_opt("PROVIDER_ACCOUNT_ID"),
            vpclattice_endpoint: env_var_opt("PROVIDER_VPCLATTICE_ENDPOINT"),
            ignore_tags: IgnoreTagsConfig {
                keys: env_var_list("PROVIDER_IGNORE_TAGS_KEYS"),
                key_prefixes: env_var_list("PROVIDER_IGNORE_TAGS_KEY_PREFIXES"),
            },
            log_level: env_var_or_default_str("LOG_LEVEL", DEFAULT_LOG_LEVEL),
            log_format: env_var_or_default_str("LOG_FORMAT", DEFAULT_LOG_FORMAT),
            enable_metrics: env_var_or_default_bool("ENABLE_METRICS", true),
        }
    }

    /// Load configuration from a YAML file; missing fields take defaults
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read provider config {}", path.display()))?;
        Self::from_yaml_str(&contents)
            .with_context(|| format!("Failed to parse provider config {}", path.display()))
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(contents)?;
        Ok(config)
    }

    /// File configuration when `path` is given, environment otherwise
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_yaml_file(path),
            None => Ok(Self::from_env()),
        }
    }
}

fn env_var_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Read a comma-separated environment variable as a set
fn env_var_list(key: &str) -> BTreeSet<String> {
    std::env::var(key)
        .map(|v| parse_list(&v))
        .unwrap_or_default()
}

fn parse_list(value: &str) -> BTreeSet<String> {
    value
        .split(ENV_LIST_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Read environment variable as boolean or return default
fn env_var_or_default_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|v| {
            let v_lower = v.to_lowercase();
            v_lower == "true" || v_lower == "1" || v_lower == "yes" || v_lower == "on"
        })
        .unwrap_or(default)
}

/// Read environment variable as string or return default
fn env_var_or_default_str(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
