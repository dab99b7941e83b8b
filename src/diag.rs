//! # Diagnostics
//!
//! Structured warnings and errors handed back to the plugin framework.
//!
//! Validators produce a [`Validation`] which converts into diagnostics
//! attached to the validated attribute. Read handlers fail fast and return
//! a single error diagnostic built with [`diag_error`] or
//! [`Diagnostics::append_error`].

use crate::validation::Validation;
use serde::Serialize;
use std::fmt;

/// Action names used in diagnostic summaries
pub const ERR_ACTION_READING: &str = "reading";
pub const ERR_ACTION_SETTING: &str = "setting";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: String::new(),
            attribute: None,
        }
    }

    pub fn warning(summary: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            summary: summary.into(),
            detail: String::new(),
            attribute: None,
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        };
        write!(f, "{level}: {}", self.summary)?;
        if let Some(attribute) = &self.attribute {
            write!(f, " (attribute {attribute:?})")?;
        }
        if !self.detail.is_empty() {
            write!(f, "\n\n{}", self.detail)?;
        }
        Ok(())
    }
}

/// Ordered list of diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    /// Append an error diagnostic and return the list, for `return diags.append_error(..)`
    #[must_use]
    pub fn append_error(mut self, summary: impl Into<String>) -> Self {
        self.0.push(Diagnostic::error(summary));
        self
    }

    /// Convert a validator result into diagnostics for `attribute`
    pub fn extend_validation(&mut self, attribute: &str, validation: Validation) {
        for warning in validation.warnings {
            self.0
                .push(Diagnostic::warning(warning).with_attribute(attribute));
        }
        for error in validation.errors {
            self.0
                .push(Diagnostic::error(error.to_string()).with_attribute(attribute));
        }
    }

    #[must_use]
    pub fn has_error(&self) -> bool {
        self.0.iter().any(|d| d.severity == Severity::Error)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.0.iter()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter().filter(|d| d.severity == Severity::Error)
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Diagnostic> for Diagnostics {
    fn from(diagnostic: Diagnostic) -> Self {
        Self(vec![diagnostic])
    }
}

/// Standard problem message: `{action} {service} {resource} ({id}): {err}`
pub fn problem_message(
    service: &str,
    action: &str,
    resource: &str,
    id: &str,
    err: &dyn fmt::Display,
) -> String {
    format!("{action} {service} {resource} ({id}): {err}")
}

/// Single error diagnostic in the standard problem format
pub fn diag_error(
    service: &str,
    action: &str,
    resource: &str,
    id: &str,
    err: &dyn fmt::Display,
) -> Diagnostics {
    Diagnostic::error(problem_message(service, action, resource, id, err)).into()
}
