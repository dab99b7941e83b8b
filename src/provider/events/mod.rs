//! # EventBridge
//!
//! Field validators for EventBridge resources.

mod validate;

pub use crate::validation::{map_keys_do_not_match, map_max_items};
pub use validate::{
    event_bus_arn_check, is_event_bus_arn, validate_archive_name, validate_bus_name,
    validate_bus_name_or_arn, validate_custom_event_bus_name, validate_rule_name,
    validate_source_name, validate_target_id, DEFAULT_EVENT_BUS_NAME, EVENTS_SERVICE,
    RULE_NAME_PATTERN,
};
