//! # Errors
//!
//! Typed errors returned by remote lookups and attribute handling.
//!
//! Validators never return these; they accumulate [`ValidationError`]s
//! instead (see [`crate::validation`]).
//!
//! [`ValidationError`]: crate::validation::ValidationError

use thiserror::Error;

/// Errors raised while talking to the remote API
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The requested resource does not exist (or the response was empty)
    #[error("couldn't find resource: {message}")]
    NotFound { message: String },

    /// Any other failure returned by the remote API
    #[error("{operation}: {message}")]
    Api { operation: String, message: String },

    /// Client construction or credential discovery failed
    #[error("configuring AWS client: {0}")]
    Configuration(String),
}

impl ProviderError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn api(operation: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Api {
            operation: operation.into(),
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Errors raised when writing an attribute into resource data
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetAttributeError {
    #[error("attribute {0:?} is not defined in the schema")]
    UnknownAttribute(String),

    #[error("attribute {name:?} expects a {expected} value, got {actual}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },
}
