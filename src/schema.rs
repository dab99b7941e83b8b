//! # Schema
//!
//! Attribute schemas and the per-invocation resource data they govern.
//!
//! The plugin framework owns state persistence and diffing. This module
//! only models the narrow surface a read handler touches: typed attribute
//! definitions, config validation, and the accessor/setter pair on
//! [`ResourceData`].

use crate::diag::{Diagnostic, Diagnostics};
use crate::error::SetAttributeError;
use crate::validation::{MapValidator, StringValidator};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
    Int,
    /// Map of string to string
    Map,
}

impl AttributeType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AttributeType::String => "string",
            AttributeType::Int => "int",
            AttributeType::Map => "map",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    String(String),
    Int(i64),
    Map(BTreeMap<String, String>),
}

impl AttributeValue {
    #[must_use]
    pub fn kind(&self) -> AttributeType {
        match self {
            AttributeValue::String(_) => AttributeType::String,
            AttributeValue::Int(_) => AttributeType::Int,
            AttributeValue::Map(_) => AttributeType::Map,
        }
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::String(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string())
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Int(value)
    }
}

impl From<BTreeMap<String, String>> for AttributeValue {
    fn from(value: BTreeMap<String, String>) -> Self {
        AttributeValue::Map(value)
    }
}

/// Validator attached to an attribute; its kind must match the attribute type
#[derive(Debug, Clone)]
pub enum AttributeValidator {
    String(StringValidator),
    Map(MapValidator),
}

#[derive(Debug, Clone)]
pub struct AttributeSchema {
    pub kind: AttributeType,
    pub required: bool,
    pub computed: bool,
    pub validator: Option<AttributeValidator>,
}

impl AttributeSchema {
    #[must_use]
    pub fn required(kind: AttributeType) -> Self {
        Self {
            kind,
            required: true,
            computed: false,
            validator: None,
        }
    }

    #[must_use]
    pub fn computed(kind: AttributeType) -> Self {
        Self {
            kind,
            required: false,
            computed: true,
            validator: None,
        }
    }

    #[must_use]
    pub fn with_validator(mut self, validator: AttributeValidator) -> Self {
        self.validator = Some(validator);
        self
    }
}

/// Named attribute definitions for a resource or data source
#[derive(Debug, Clone, Default)]
pub struct Schema {
    attributes: BTreeMap<&'static str, AttributeSchema>,
}

impl Schema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn attribute(mut self, name: &'static str, attribute: AttributeSchema) -> Self {
        self.attributes.insert(name, attribute);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeSchema> {
        self.attributes.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.attributes.keys().copied()
    }

    /// Check user configuration against the schema.
    ///
    /// Reports missing required attributes, values for computed-only or
    /// unknown attributes, type mismatches, and every attribute validator
    /// finding.
    #[must_use]
    pub fn validate_config(&self, config: &BTreeMap<String, AttributeValue>) -> Diagnostics {
        let mut diags = Diagnostics::new();

        for (name, attribute) in &self.attributes {
            if attribute.required && !config.contains_key(*name) {
                diags.push(
                    Diagnostic::error(format!("The argument {name:?} is required, but no definition was found."))
                        .with_attribute(*name),
                );
            }
        }

        for (name, value) in config {
            let Some(attribute) = self.attributes.get(name.as_str()) else {
                diags.push(
                    Diagnostic::error(format!("An argument named {name:?} is not expected here."))
                        .with_attribute(name.clone()),
                );
                continue;
            };

            if attribute.computed && !attribute.required {
                diags.push(
                    Diagnostic::error(format!("{name:?}: this field cannot be set"))
                        .with_attribute(name.clone()),
                );
                continue;
            }

            if value.kind() != attribute.kind {
                diags.push(
                    Diagnostic::error(format!(
                        "expected type of {name} to be {}",
                        attribute.kind.as_str()
                    ))
                    .with_attribute(name.clone()),
                );
                continue;
            }

            match (&attribute.validator, value) {
                (Some(AttributeValidator::String(v)), AttributeValue::String(s)) => {
                    diags.extend_validation(name, v.validate(s, name));
                }
                (Some(AttributeValidator::Map(v)), AttributeValue::Map(m)) => {
                    diags.extend_validation(name, v.validate(m, name));
                }
                _ => {}
            }
        }

        diags
    }
}

/// Attribute values for a single read invocation
#[derive(Debug, Clone)]
pub struct ResourceData<'s> {
    schema: &'s Schema,
    id: Option<String>,
    attributes: BTreeMap<String, AttributeValue>,
}

impl<'s> ResourceData<'s> {
    #[must_use]
    pub fn new(schema: &'s Schema) -> Self {
        Self {
            schema,
            id: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Seed resource data from user configuration.
    ///
    /// Entries that fail to set are dropped; run [`Schema::validate_config`]
    /// first to report them.
    #[must_use]
    pub fn from_config(schema: &'s Schema, config: BTreeMap<String, AttributeValue>) -> Self {
        let mut data = Self::new(schema);
        for (name, value) in config {
            // Already surfaced by validate_config
            let _ = data.set(&name, value);
        }
        data
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// String value, or `""` when unset or not a string
    #[must_use]
    pub fn get_string(&self, name: &str) -> &str {
        match self.attributes.get(name) {
            Some(AttributeValue::String(s)) => s,
            _ => "",
        }
    }

    /// Int value, or `0` when unset or not an int
    #[must_use]
    pub fn get_int(&self, name: &str) -> i64 {
        match self.attributes.get(name) {
            Some(AttributeValue::Int(i)) => *i,
            _ => 0,
        }
    }

    #[must_use]
    pub fn get_map(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        match self.attributes.get(name) {
            Some(AttributeValue::Map(m)) => Some(m),
            _ => None,
        }
    }

    pub fn set(
        &mut self,
        name: &str,
        value: impl Into<AttributeValue>,
    ) -> Result<(), SetAttributeError> {
        let value = value.into();
        let attribute = self
            .schema
            .get(name)
            .ok_or_else(|| SetAttributeError::UnknownAttribute(name.to_string()))?;

        if attribute.kind != value.kind() {
            return Err(SetAttributeError::TypeMismatch {
                name: name.to_string(),
                expected: attribute.kind.as_str(),
                actual: value.kind().as_str(),
            });
        }

        self.attributes.insert(name.to_string(), value);
        Ok(())
    }

    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, AttributeValue> {
        &self.attributes
    }

    /// State as handed back to the framework: `id` plus every attribute
    #[must_use]
    pub fn to_state(&self) -> serde_json::Value {
        let mut state = serde_json::Map::new();
        state.insert(
            "id".to_string(),
            self.id
                .as_ref()
                .map_or(serde_json::Value::Null, |id| serde_json::Value::String(id.clone())),
        );
        for (name, value) in &self.attributes {
            // AttributeValue serialization cannot fail
            if let Ok(v) = serde_json::to_value(value) {
                state.insert(name.clone(), v);
            }
        }
        serde_json::Value::Object(state)
    }
}
