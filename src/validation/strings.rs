//! # String Validators
//!
//! Length and pattern checks plus the `all` / `any` combinators.

use super::{StringValidator, Validation, ValidationError};
use regex::Regex;

/// Byte length must be within `[min, max]`
pub fn string_len_between(min: usize, max: usize) -> StringValidator {
    StringValidator::new(move |value, key| {
        if value.len() < min || value.len() > max {
            return ValidationError::LengthOutOfRange {
                key: key.to_string(),
                min,
                max,
                value: value.to_string(),
            }
            .into();
        }
        Validation::ok()
    })
}

/// Value must match `re`. An empty `message` falls back to the generic wording.
pub fn string_match(re: Regex, message: &str) -> StringValidator {
    let message = message.to_string();
    StringValidator::new(move |value, key| {
        if re.is_match(value) {
            return Validation::ok();
        }
        if message.is_empty() {
            ValidationError::NoMatch {
                key: key.to_string(),
                pattern: re.as_str().to_string(),
                value: value.to_string(),
            }
            .into()
        } else {
            ValidationError::Invalid {
                key: key.to_string(),
                message: message.clone(),
            }
            .into()
        }
    })
}

/// Value must not match `re`
pub fn string_does_not_match(re: Regex, message: &str) -> StringValidator {
    let message = message.to_string();
    StringValidator::new(move |value, key| {
        if !re.is_match(value) {
            return Validation::ok();
        }
        if message.is_empty() {
            ValidationError::ForbiddenMatch {
                key: key.to_string(),
                pattern: re.as_str().to_string(),
                value: value.to_string(),
            }
            .into()
        } else {
            ValidationError::Invalid {
                key: key.to_string(),
                message: message.clone(),
            }
            .into()
        }
    })
}

/// Run every validator and report everything they found
pub fn all(validators: Vec<StringValidator>) -> StringValidator {
    StringValidator::new(move |value, key| {
        let mut result = Validation::ok();
        for validator in &validators {
            result.merge(validator.validate(value, key));
        }
        result
    })
}

/// Pass when at least one validator reports no errors.
///
/// When every validator fails, all of their errors are returned. Warnings
/// are always collected.
pub fn any(validators: Vec<StringValidator>) -> StringValidator {
    StringValidator::new(move |value, key| {
        let mut result = Validation::ok();
        for validator in &validators {
            let outcome = validator.validate(value, key);
            if outcome.is_ok() {
                result.warnings.extend(outcome.warnings);
                result.errors.clear();
                return result;
            }
            result.merge(outcome);
        }
        result
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn re(pattern: &str) -> Regex {
        Regex::new(pattern).unwrap()
    }

    #[test]
    fn test_string_len_between_bounds() {
        let v = string_len_between(1, 3);
        assert!(v.validate("a", "k").is_ok());
        assert!(v.validate("abc", "k").is_ok());
        assert!(!v.validate("", "k").is_ok());

        let outcome = v.validate("abcd", "k");
        assert_eq!(
            outcome.errors[0].to_string(),
            "expected length of k to be in the range (1 - 3), got abcd"
        );
    }

    #[test]
    fn test_string_match_messages() {
        let generic = string_match(re("^[a-z]+$"), "");
        let outcome = generic.validate("ABC", "name");
        assert_eq!(
            outcome.errors[0].to_string(),
            r#"expected value of name to match regular expression "^[a-z]+$", got ABC"#
        );

        let custom = string_match(re("^[a-z]+$"), "lowercase only");
        let outcome = custom.validate("ABC", "name");
        assert_eq!(
            outcome.errors[0].to_string(),
            "invalid value for name (lowercase only)"
        );
        assert!(custom.validate("abc", "name").is_ok());
    }

    #[test]
    fn test_string_does_not_match() {
        let v = string_does_not_match(re("^default$"), "cannot be 'default'");
        assert!(v.validate("custom", "name").is_ok());
        assert!(v.validate("default-ish", "name").is_ok());

        let outcome = v.validate("default", "name");
        assert_eq!(
            outcome.errors[0].to_string(),
            "invalid value for name (cannot be 'default')"
        );
    }

    #[test]
    fn test_all_reports_every_failure() {
        let v = all(vec![string_len_between(1, 2), string_match(re("^[a-z]+$"), "")]);
        assert_eq!(v.validate("ABC", "k").errors.len(), 2);
        assert_eq!(v.validate("AB", "k").errors.len(), 1);
        assert!(v.validate("ab", "k").is_ok());
    }

    #[test]
    fn test_any_short_circuits_on_success() {
        let v = any(vec![string_match(re("^[0-9]+$"), ""), string_match(re("^[a-z]+$"), "")]);
        assert!(v.validate("123", "k").is_ok());
        assert!(v.validate("abc", "k").is_ok());
        assert_eq!(v.validate("ABC", "k").errors.len(), 2);
    }
}
