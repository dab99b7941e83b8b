//! # Constants
//!
//! Shared constants used throughout the provider.
//!
//! Defaults here can be overridden via configuration or environment
//! variables where applicable.

/// Human-friendly service name used in diagnostics
pub const VPC_LATTICE_SERVICE: &str = "VPC Lattice";

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "provider_aws=info";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

/// Default log format (json, text)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Separator for list-valued environment variables
pub const ENV_LIST_SEPARATOR: char = ',';

/// Rendering of an absent API timestamp
pub const ZERO_TIMESTAMP: &str = "0001-01-01 00:00:00 +0000 UTC";
