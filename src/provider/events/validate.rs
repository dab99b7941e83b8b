//! # EventBridge Naming Validators
//!
//! Naming rules for event buses, rules, targets, archives and partner
//! event sources.
//!
//! References:
//! - Rules: https://docs.aws.amazon.com/eventbridge/latest/APIReference/API_PutRule.html
//! - Targets: https://docs.aws.amazon.com/eventbridge/latest/APIReference/API_Target.html

use crate::arn::Arn;
use crate::validation::{
    all, any, string_does_not_match, string_len_between, string_match, valid_arn_check,
    StringValidator, Validation, ValidationError,
};
use regex::Regex;
use std::sync::LazyLock;

/// Service name found in EventBridge ARNs
pub const EVENTS_SERVICE: &str = "events";

/// Name of the bus every account owns; custom buses cannot reuse it
pub const DEFAULT_EVENT_BUS_NAME: &str = "default";

const RULE_NAME_MAX_LEN: usize = 64;
const TARGET_ID_MAX_LEN: usize = 64;
const ARCHIVE_NAME_MAX_LEN: usize = 48;
const BUS_NAME_MAX_LEN: usize = 256;
const BUS_NAME_OR_ARN_MAX_LEN: usize = 1600;
const SOURCE_NAME_MAX_LEN: usize = 256;

const VALID_NAME_CHARS: &str = r"\.\-_A-Za-z0-9";
const VALID_BUS_NAME_CHARS: &str = r"/\.\-_A-Za-z0-9";

/// Pattern shared by rule names and target ids
pub const RULE_NAME_PATTERN: &str = r"^[\.\-_A-Za-z0-9]+$";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Failed to compile built-in pattern - this should never happen")
}

fn name_char_class() -> String {
    format!("[{VALID_NAME_CHARS}]+")
}

fn bus_name_char_class() -> String {
    format!("[{VALID_BUS_NAME_CHARS}]+")
}

static RULE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| compile(RULE_NAME_PATTERN));

static EVENT_BUS_RESOURCE_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!("^event-bus/({})$", bus_name_char_class())));

static BUS_NAME_FORMAT: LazyLock<StringValidator> = LazyLock::new(|| {
    string_match(compile(&format!("^{}$", bus_name_char_class())), "")
});

static ARCHIVE_NAME: LazyLock<StringValidator> = LazyLock::new(|| {
    all(vec![
        string_len_between(1, ARCHIVE_NAME_MAX_LEN),
        string_match(compile(&format!("^{}$", name_char_class())), ""),
    ])
});

static BUS_NAME: LazyLock<StringValidator> = LazyLock::new(|| {
    all(vec![
        string_len_between(1, BUS_NAME_MAX_LEN),
        BUS_NAME_FORMAT.clone(),
    ])
});

static BUS_NAME_OR_ARN: LazyLock<StringValidator> = LazyLock::new(|| {
    all(vec![
        string_len_between(1, BUS_NAME_OR_ARN_MAX_LEN),
        any(vec![
            valid_arn_check(vec![event_bus_arn_check]),
            BUS_NAME_FORMAT.clone(),
        ]),
    ])
});

static SOURCE_NAME: LazyLock<StringValidator> = LazyLock::new(|| {
    all(vec![
        string_len_between(1, SOURCE_NAME_MAX_LEN),
        string_match(
            compile(&format!(r"^aws\.partner(/{}){{2,}}$", name_char_class())),
            "",
        ),
    ])
});

static CUSTOM_EVENT_BUS_NAME: LazyLock<StringValidator> = LazyLock::new(|| {
    all(vec![
        string_len_between(1, BUS_NAME_MAX_LEN),
        string_does_not_match(
            compile(&format!("^{DEFAULT_EVENT_BUS_NAME}$")),
            "cannot be 'default'",
        ),
    ])
});

fn max_len_and_pattern(value: &str, key: &str, max: usize) -> Validation {
    let mut result = Validation::ok();

    if value.len() > max {
        result.push_error(ValidationError::TooLong {
            key: key.to_string(),
            max,
            value: value.to_string(),
        });
    }

    if !RULE_NAME_RE.is_match(value) {
        result.push_error(ValidationError::NotCompliant {
            key: key.to_string(),
            pattern: RULE_NAME_PATTERN.to_string(),
            value: value.to_string(),
        });
    }

    result
}

/// Rule names: at most 64 characters of `[.\-_A-Za-z0-9]`
#[must_use]
pub fn validate_rule_name(value: &str, key: &str) -> Validation {
    max_len_and_pattern(value, key, RULE_NAME_MAX_LEN)
}

/// Target ids: same constraints as rule names
#[must_use]
pub fn validate_target_id(value: &str, key: &str) -> Validation {
    max_len_and_pattern(value, key, TARGET_ID_MAX_LEN)
}

#[must_use]
pub fn validate_archive_name(value: &str, key: &str) -> Validation {
    ARCHIVE_NAME.validate(value, key)
}

/// Bus names: 1-256 characters, name characters plus `/`
#[must_use]
pub fn validate_bus_name(value: &str, key: &str) -> Validation {
    BUS_NAME.validate(value, key)
}

/// Either a bus name or an event bus ARN, up to 1600 characters
#[must_use]
pub fn validate_bus_name_or_arn(value: &str, key: &str) -> Validation {
    BUS_NAME_OR_ARN.validate(value, key)
}

/// Partner event sources: `aws.partner/<segment>/<segment>[/...]`
#[must_use]
pub fn validate_source_name(value: &str, key: &str) -> Validation {
    SOURCE_NAME.validate(value, key)
}

/// Custom bus names cannot be `default`
#[must_use]
pub fn validate_custom_event_bus_name(value: &str, key: &str) -> Validation {
    CUSTOM_EVENT_BUS_NAME.validate(value, key)
}

/// Whether `arn` names an EventBridge event bus
#[must_use]
pub fn is_event_bus_arn(arn: &Arn) -> bool {
    if arn.service != EVENTS_SERVICE {
        return false;
    }
    EVENT_BUS_RESOURCE_RE.is_match(&arn.resource)
}

/// ARN check used by [`validate_bus_name_or_arn`]
pub fn event_bus_arn_check(value: &str, key: &str, arn: &Arn) -> Validation {
    if is_event_bus_arn(arn) {
        return Validation::ok();
    }
    ValidationError::NotEventBusArn {
        key: key.to_string(),
        value: value.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_name_errors_accumulate() {
        let value = format!("{} bad", "a".repeat(64));
        let outcome = validate_rule_name(&value, "name");
        assert_eq!(outcome.errors.len(), 2);
        assert!(matches!(outcome.errors[0], ValidationError::TooLong { max: 64, .. }));
        assert!(matches!(outcome.errors[1], ValidationError::NotCompliant { .. }));
    }

    #[test]
    fn test_rule_name_empty_is_not_compliant() {
        let outcome = validate_rule_name("", "name");
        assert_eq!(outcome.errors.len(), 1);
        assert!(matches!(outcome.errors[0], ValidationError::NotCompliant { .. }));
    }

    #[test]
    fn test_event_bus_arn_resource_must_be_bus() {
        let rule = Arn::parse("arn:aws:events:us-east-1:123456789012:rule/my-rule").unwrap();
        assert!(!is_event_bus_arn(&rule));

        let bus =
            Arn::parse("arn:aws:events:us-east-1:123456789012:event-bus/aws.partner/a/b").unwrap();
        assert!(is_event_bus_arn(&bus));
    }
}
