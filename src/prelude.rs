//! # Prelude
//!
//! Re-exports commonly used types and functions.
//!
//! ```rust
//! use provider_aws::prelude::*;
//! ```

pub use crate::arn::{Arn, ArnError};
pub use crate::config::ProviderConfig;
pub use crate::diag::{Diagnostic, Diagnostics, Severity};
pub use crate::error::{ProviderError, SetAttributeError};
pub use crate::provider::events::{
    is_event_bus_arn, validate_archive_name, validate_bus_name, validate_bus_name_or_arn,
    validate_custom_event_bus_name, validate_rule_name, validate_source_name, validate_target_id,
};
pub use crate::provider::vpclattice::{ServiceNetwork, ServiceNetworkDataSource, VpcLatticeApi};
pub use crate::provider::{data_source, read_data_source, AwsClient, DataSource};
pub use crate::schema::{AttributeType, AttributeValue, ResourceData, Schema};
pub use crate::tags::{IgnoreTagsConfig, KeyValueTags};
pub use crate::validation::{Validation, ValidationError};
