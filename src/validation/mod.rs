//! # Validation
//!
//! Statically typed field validators.
//!
//! A validator takes the attribute value and the attribute key (used in
//! messages) and returns a [`Validation`] holding every warning and error
//! found. Validators never short-circuit: all violations are reported so
//! the caller can display them together.
//!
//! Building blocks live here; resource-specific rules (EventBridge naming)
//! compose them in [`crate::provider::events`].

mod arn;
mod maps;
mod strings;

pub use arn::{valid_arn_check, ArnCheckFn};
pub use maps::{map_keys_do_not_match, map_max_items};
pub use strings::{all, any, string_does_not_match, string_len_between, string_match};

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// A single constraint violation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{key:?} cannot be longer than {max} characters: {value:?}")]
    TooLong {
        key: String,
        max: usize,
        value: String,
    },

    #[error("{key:?} doesn't comply with restrictions ({pattern:?}): {value:?}")]
    NotCompliant {
        key: String,
        pattern: String,
        value: String,
    },

    #[error("expected length of {key} to be in the range ({min} - {max}), got {value}")]
    LengthOutOfRange {
        key: String,
        min: usize,
        max: usize,
        value: String,
    },

    #[error("invalid value for {key} ({message})")]
    Invalid { key: String, message: String },

    #[error("expected value of {key} to match regular expression {pattern:?}, got {value}")]
    NoMatch {
        key: String,
        pattern: String,
        value: String,
    },

    #[error("expected value of {key} to not match regular expression {pattern:?}, got {value}")]
    ForbiddenMatch {
        key: String,
        pattern: String,
        value: String,
    },

    #[error("{key:?} ({value}) is an invalid ARN: {reason}")]
    InvalidArn {
        key: String,
        value: String,
        reason: String,
    },

    #[error("{key:?} ({value}) is not a valid Event Bus ARN")]
    NotEventBusArn { key: String, value: String },

    #[error("{key}: {message}: {map_key}")]
    ForbiddenMapKey {
        key: String,
        message: String,
        map_key: String,
    },

    #[error("expected number of items in {key} to be less than or equal to {max}, got {actual}")]
    TooManyItems {
        key: String,
        max: usize,
        actual: usize,
    },
}

/// Warnings and errors collected by a validator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub warnings: Vec<String>,
    pub errors: Vec<ValidationError>,
}

impl Validation {
    #[must_use]
    pub fn ok() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn merge(&mut self, other: Validation) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
    }
}

impl From<ValidationError> for Validation {
    fn from(error: ValidationError) -> Self {
        Self {
            warnings: Vec::new(),
            errors: vec![error],
        }
    }
}

type StringValidateFn = dyn Fn(&str, &str) -> Validation + Send + Sync;
type MapValidateFn = dyn Fn(&BTreeMap<String, String>, &str) -> Validation + Send + Sync;

/// Validator for string attributes
#[derive(Clone)]
pub struct StringValidator(Arc<StringValidateFn>);

impl StringValidator {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str, &str) -> Validation + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    #[must_use]
    pub fn validate(&self, value: &str, key: &str) -> Validation {
        (self.0)(value, key)
    }
}

impl fmt::Debug for StringValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringValidator").finish_non_exhaustive()
    }
}

/// Validator for map-of-string attributes
#[derive(Clone)]
pub struct MapValidator(Arc<MapValidateFn>);

impl MapValidator {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&BTreeMap<String, String>, &str) -> Validation + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    #[must_use]
    pub fn validate(&self, value: &BTreeMap<String, String>, key: &str) -> Validation {
        (self.0)(value, key)
    }
}

impl fmt::Debug for MapValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapValidator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_accumulates() {
        let mut first = Validation::from(ValidationError::Invalid {
            key: "name".to_string(),
            message: "first".to_string(),
        });
        let mut second = Validation::ok();
        second.warnings.push("careful".to_string());
        second.push_error(ValidationError::Invalid {
            key: "name".to_string(),
            message: "second".to_string(),
        });

        first.merge(second);
        assert_eq!(first.errors.len(), 2);
        assert_eq!(first.warnings, vec!["careful".to_string()]);
        assert!(!first.is_ok());
    }

    #[test]
    fn test_error_messages_quote_values() {
        let err = ValidationError::NotCompliant {
            key: "name".to_string(),
            pattern: r"^[\.\-_A-Za-z0-9]+$".to_string(),
            value: "bad name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#""name" doesn't comply with restrictions ("^[\\.\\-_A-Za-z0-9]+$"): "bad name""#
        );
    }
}
