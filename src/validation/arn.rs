//! # ARN Validation
//!
//! Structural and shape checks for ARN-valued attributes.

use super::{StringValidator, Validation, ValidationError};
use crate::arn::Arn;
use regex::Regex;
use std::sync::LazyLock;

/// Extra check run against a successfully parsed ARN: `(value, key, arn)`
pub type ArnCheckFn = fn(&str, &str, &Arn) -> Validation;

const PARTITION_PATTERN: &str = r"^aws(-[a-z]+)*$";
const REGION_PATTERN: &str = r"^[a-z]{2}(-[a-z]+)+-\d{1,2}$";
const ACCOUNT_ID_PATTERN: &str = r"^(aws|aws-managed|third-party|\d{12}|cw.{10})$";

static PARTITION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(PARTITION_PATTERN).expect("partition pattern is a valid regex")
});

static REGION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(REGION_PATTERN).expect("region pattern is a valid regex"));

static ACCOUNT_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(ACCOUNT_ID_PATTERN).expect("account id pattern is a valid regex")
});

/// Value must be an ARN with well-formed sections, and pass every `checks` entry.
///
/// An empty value is accepted; pair with a length validator when the
/// attribute is required.
pub fn valid_arn_check(checks: Vec<ArnCheckFn>) -> StringValidator {
    StringValidator::new(move |value, key| {
        if value.is_empty() {
            return Validation::ok();
        }

        let invalid = |reason: String| ValidationError::InvalidArn {
            key: key.to_string(),
            value: value.to_string(),
            reason,
        };

        let arn = match Arn::parse(value) {
            Ok(arn) => arn,
            Err(e) => return invalid(e.to_string()).into(),
        };

        let mut result = Validation::ok();

        if arn.partition.is_empty() {
            result.push_error(invalid("missing partition value".to_string()));
        } else if !PARTITION_RE.is_match(&arn.partition) {
            result.push_error(invalid(format!(
                "invalid partition value (expecting to match regular expression: {PARTITION_PATTERN})"
            )));
        }

        if !arn.region.is_empty() && !REGION_RE.is_match(&arn.region) {
            result.push_error(invalid(format!(
                "invalid region value (expecting to match regular expression: {REGION_PATTERN})"
            )));
        }

        if !arn.account_id.is_empty() && !ACCOUNT_ID_RE.is_match(&arn.account_id) {
            result.push_error(invalid(format!(
                "invalid account ID value (expecting to match regular expression: {ACCOUNT_ID_PATTERN})"
            )));
        }

        if arn.resource.is_empty() {
            result.push_error(invalid("missing resource value".to_string()));
        }

        for check in &checks {
            result.merge(check(value, key, &arn));
        }

        result
    })
}
