//! # Validation Tests
//!
//! Tests for the EventBridge naming validators.
//!
//! These tests verify:
//! - Rule name and target id length/pattern checks
//! - Archive, bus and custom bus names
//! - Partner event source names
//! - Bus name or event bus ARN

use provider_aws::prelude::*;
use provider_aws::provider::events::{map_keys_do_not_match, map_max_items};
use regex::Regex;
use std::collections::BTreeMap;

#[test]
fn test_validate_rule_name_valid() {
    let max_name = "a".repeat(64);
    let valid_names = vec![
        "my-rule",
        "My_Rule.v2",
        "rule-123",
        "...",
        "a",
        max_name.as_str(),
    ];

    for name in valid_names {
        let outcome = validate_rule_name(name, "name");
        assert!(outcome.is_ok(), "Rule name '{name}' should be valid: {outcome:?}");
        assert!(outcome.warnings.is_empty());
    }
}

#[test]
fn test_validate_rule_name_invalid() {
    let too_long = "a".repeat(65);
    let invalid_names = vec![
        "",            // Empty
        "my rule",     // Space
        "my/rule",     // Slash
        "rule:1",      // Colon
        "règle",       // Non-ASCII
        too_long.as_str(), // Too long
    ];

    for name in invalid_names {
        assert!(
            !validate_rule_name(name, "name").is_ok(),
            "Rule name '{name}' should be invalid"
        );
    }
}

#[test]
fn test_validate_rule_name_reports_every_problem() {
    let value = format!("{} !", "a".repeat(64));
    let outcome = validate_rule_name(&value, "name");

    assert_eq!(outcome.errors.len(), 2);
    assert_eq!(
        outcome.errors[0].to_string(),
        format!("\"name\" cannot be longer than 64 characters: {value:?}")
    );
    assert!(outcome.errors[1]
        .to_string()
        .starts_with("\"name\" doesn't comply with restrictions"));
}

#[test]
fn test_validate_rule_name_length_only() {
    let value = "a".repeat(65);
    let outcome = validate_rule_name(&value, "name");

    assert_eq!(outcome.errors.len(), 1);
    assert!(matches!(
        outcome.errors[0],
        ValidationError::TooLong { max: 64, .. }
    ));
}

#[test]
fn test_validate_target_id() {
    assert!(validate_target_id("target-1", "target_id").is_ok());
    assert!(validate_target_id(&"t".repeat(64), "target_id").is_ok());

    let outcome = validate_target_id(&"t".repeat(65), "target_id");
    assert_eq!(outcome.errors.len(), 1);

    let outcome = validate_target_id("target 1", "target_id");
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].to_string().contains("\"target_id\""));
}

#[test]
fn test_validate_archive_name_valid() {
    let max_name = "a".repeat(48);
    let valid_names = vec!["my-archive", "archive_1.backup", max_name.as_str()];

    for name in valid_names {
        assert!(
            validate_archive_name(name, "name").is_ok(),
            "Archive name '{name}' should be valid"
        );
    }
}

#[test]
fn test_validate_archive_name_invalid() {
    let too_long = "a".repeat(49);
    let invalid_names = vec![
        "",               // Empty
        "my/archive",     // Slash
        "my archive",     // Space
        too_long.as_str(), // Too long
    ];

    for name in invalid_names {
        assert!(
            !validate_archive_name(name, "name").is_ok(),
            "Archive name '{name}' should be invalid"
        );
    }
}

#[test]
fn test_validate_bus_name_valid() {
    let max_name = "b".repeat(256);
    let valid_names = vec![
        "default",
        "my-bus",
        "aws.partner/example.com/123/events",
        "orders_bus.v2",
        max_name.as_str(),
    ];

    for name in valid_names {
        assert!(
            validate_bus_name(name, "event_bus_name").is_ok(),
            "Bus name '{name}' should be valid"
        );
    }
}

#[test]
fn test_validate_bus_name_invalid() {
    let too_long = "b".repeat(257);
    let invalid_names = vec![
        "",                 // Empty
        "my bus",           // Space
        "bus:name",         // Colon
        too_long.as_str(),  // Too long
    ];

    for name in invalid_names {
        assert!(
            !validate_bus_name(name, "event_bus_name").is_ok(),
            "Bus name '{name}' should be invalid"
        );
    }
}

#[test]
fn test_validate_bus_name_or_arn_valid() {
    let valid_values = vec![
        "default",
        "my-bus",
        "arn:aws:events:us-east-1:123456789012:event-bus/default",
        "arn:aws:events:us-east-1:123456789012:event-bus/aws.partner/example.com/1/events",
        "arn:aws-us-gov:events:us-gov-west-1:123456789012:event-bus/my-bus",
    ];

    for value in valid_values {
        let outcome = validate_bus_name_or_arn(value, "event_bus_name");
        assert!(outcome.is_ok(), "'{value}' should be valid: {outcome:?}");
    }
}

#[test]
fn test_validate_bus_name_or_arn_invalid() {
    let too_long = format!(
        "arn:aws:events:us-east-1:123456789012:event-bus/{}",
        "b".repeat(1600)
    );
    let invalid_values = vec![
        "",
        "my bus",
        "arn:aws:sqs:us-east-1:123456789012:my-queue",
        "arn:aws:events:us-east-1:123456789012:rule/my-rule",
        too_long.as_str(),
    ];

    for value in invalid_values {
        assert!(
            !validate_bus_name_or_arn(value, "event_bus_name").is_ok(),
            "'{value}' should be invalid"
        );
    }
}

#[test]
fn test_is_event_bus_arn() {
    let bus: Arn = "arn:aws:events:us-east-1:123456789012:event-bus/default"
        .parse()
        .unwrap();
    assert!(is_event_bus_arn(&bus));

    let other_service: Arn = "arn:aws:sns:us-east-1:123456789012:event-bus/default"
        .parse()
        .unwrap();
    assert!(!is_event_bus_arn(&other_service));

    let rule: Arn = "arn:aws:events:us-east-1:123456789012:rule/default/my-rule"
        .parse()
        .unwrap();
    assert!(!is_event_bus_arn(&rule));
}

#[test]
fn test_validate_source_name_valid() {
    let valid_names = vec![
        "aws.partner/example.com/123",
        "aws.partner/example.com/123/test",
        "aws.partner/zendesk.com/12345/default",
    ];

    for name in valid_names {
        assert!(
            validate_source_name(name, "name").is_ok(),
            "Source name '{name}' should be valid"
        );
    }
}

#[test]
fn test_validate_source_name_invalid() {
    let too_long = format!("aws.partner/example.com/{}", "a".repeat(256));
    let invalid_names = vec![
        "",
        "aws.partner",
        "aws.partner/example.com",
        "aws.partner/example.com/",
        "aws.partner//123",
        "aws.partner/example.com/1 2",
        "custom.partner/example.com/123",
        "aws.partnerx/example.com/123",
        too_long.as_str(),
    ];

    for name in invalid_names {
        assert!(
            !validate_source_name(name, "name").is_ok(),
            "Source name '{name}' should be invalid"
        );
    }
}

#[test]
fn test_validate_custom_event_bus_name() {
    let valid_names = vec!["orders", "default-2", "my-default", "Default"];
    for name in valid_names {
        assert!(
            validate_custom_event_bus_name(name, "name").is_ok(),
            "Custom bus name '{name}' should be valid"
        );
    }

    let outcome = validate_custom_event_bus_name("default", "name");
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(
        outcome.errors[0].to_string(),
        "invalid value for name (cannot be 'default')"
    );

    assert!(!validate_custom_event_bus_name("", "name").is_ok());
    assert!(!validate_custom_event_bus_name(&"c".repeat(257), "name").is_ok());
}

#[test]
fn test_map_validators() {
    let reserved = map_keys_do_not_match(
        Regex::new(r"^aws:").unwrap(),
        "tag keys cannot use the aws: prefix",
    );
    let max_items = map_max_items(2);

    let ok = BTreeMap::from([("team".to_string(), "core".to_string())]);
    assert!(reserved.validate(&ok, "tags").is_ok());
    assert!(max_items.validate(&ok, "tags").is_ok());

    let bad = BTreeMap::from([
        ("aws:createdBy".to_string(), "x".to_string()),
        ("env".to_string(), "dev".to_string()),
        ("team".to_string(), "core".to_string()),
    ]);
    let outcome = reserved.validate(&bad, "tags");
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(
        outcome.errors[0].to_string(),
        "tags: tag keys cannot use the aws: prefix: aws:createdBy"
    );
    assert!(!max_items.validate(&bad, "tags").is_ok());
}
