//! Resolution of user-supplied values against the declared table.

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::Value;

use super::{ParameterDescriptor, ParameterKind, ParameterValue, PathValue, PARAMETERS, lookup};
use crate::domain::AppError;

/// A value as supplied by the user, before type checking.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Structured value from a params file. `null` unsets the parameter.
    Json(Value),
    /// Text from a `NAME=VALUE` override. An empty string unsets the parameter.
    Text(String),
}

/// Ordered user input; later entries win.
#[derive(Debug, Clone, Default)]
pub struct ParameterInput {
    entries: Vec<(String, RawValue)>,
}

impl ParameterInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: RawValue) {
        self.entries.push((name.into(), value));
    }

    /// Builder-style text override.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, RawValue::Text(value.into()));
        self
    }

    /// Append every key of a params-file object.
    pub fn extend_from_object(&mut self, object: serde_json::Map<String, Value>) {
        for (name, value) in object {
            self.push(name, RawValue::Json(value));
        }
    }

    /// Parse a `NAME=VALUE` override.
    pub fn push_assignment(&mut self, assignment: &str) -> Result<(), AppError> {
        let (name, value) = assignment.split_once('=').ok_or_else(|| AppError::ParseError {
            what: "parameter override".to_string(),
            details: format!("expected NAME=VALUE, got '{}'", assignment),
        })?;
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::ParseError {
                what: "parameter override".to_string(),
                details: format!("missing parameter name in '{}'", assignment),
            });
        }
        self.push(name, RawValue::Text(value.to_string()));
        Ok(())
    }
}

/// Fully resolved parameter values, keyed by declared name.
///
/// Only parameters with a value are stored; iteration follows table order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterSet {
    values: BTreeMap<&'static str, ParameterValue>,
}

impl ParameterSet {
    /// Type-check `input`, apply defaults, and enforce required parameters.
    ///
    /// Relative local paths are anchored at `base_dir`.
    pub fn resolve(input: &ParameterInput, base_dir: &Path) -> Result<Self, AppError> {
        let mut explicit: BTreeMap<&'static str, Option<ParameterValue>> = BTreeMap::new();

        for (name, raw) in &input.entries {
            let descriptor =
                lookup(name).ok_or_else(|| AppError::UnknownParameter(name.clone()))?;
            let value = convert(descriptor, raw, base_dir)?;
            explicit.insert(descriptor.name, value);
        }

        let mut values = BTreeMap::new();
        for descriptor in PARAMETERS {
            let value = match explicit.remove(descriptor.name) {
                Some(value) => value,
                None => descriptor.default.map(ParameterValue::from),
            };

            match value {
                Some(value) => {
                    values.insert(descriptor.name, value);
                }
                None if descriptor.required => {
                    return Err(AppError::MissingParameter(descriptor.name.to_string()));
                }
                None => {}
            }
        }

        Ok(Self { values })
    }

    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.values.get(name)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Set values in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static ParameterDescriptor, &ParameterValue)> {
        PARAMETERS
            .iter()
            .filter_map(|descriptor| self.values.get(descriptor.name).map(|v| (descriptor, v)))
    }
}

fn convert(
    descriptor: &ParameterDescriptor,
    raw: &RawValue,
    base_dir: &Path,
) -> Result<Option<ParameterValue>, AppError> {
    match raw {
        RawValue::Json(Value::Null) => Ok(None),
        RawValue::Text(text) if text.trim().is_empty() => Ok(None),
        RawValue::Json(Value::String(text)) if text.trim().is_empty() => Ok(None),
        RawValue::Json(value) => convert_json(descriptor, value, base_dir).map(Some),
        RawValue::Text(text) => convert_text(descriptor, text.trim(), base_dir).map(Some),
    }
}

fn convert_json(
    descriptor: &ParameterDescriptor,
    value: &Value,
    base_dir: &Path,
) -> Result<ParameterValue, AppError> {
    let mismatch = || {
        AppError::invalid_value(
            descriptor.name,
            format!("expected {}, got {}", descriptor.kind.as_str(), value),
        )
    };

    match descriptor.kind {
        ParameterKind::Bool => value.as_bool().map(ParameterValue::Bool).ok_or_else(mismatch),
        ParameterKind::Int => value.as_i64().map(ParameterValue::Int).ok_or_else(mismatch),
        ParameterKind::Str => {
            value.as_str().map(|s| ParameterValue::Str(s.to_string())).ok_or_else(mismatch)
        }
        ParameterKind::File | ParameterKind::Dir => value
            .as_str()
            .map(|s| ParameterValue::Path(PathValue::resolve(s, base_dir)))
            .ok_or_else(mismatch),
    }
}

fn convert_text(
    descriptor: &ParameterDescriptor,
    text: &str,
    base_dir: &Path,
) -> Result<ParameterValue, AppError> {
    match descriptor.kind {
        ParameterKind::Bool => parse_bool(text).map(ParameterValue::Bool).ok_or_else(|| {
            AppError::invalid_value(
                descriptor.name,
                format!("expected true or false, got '{}'", text),
            )
        }),
        ParameterKind::Int => text.parse::<i64>().map(ParameterValue::Int).map_err(|e| {
            AppError::invalid_value(descriptor.name, format!("'{}' is not an integer: {}", text, e))
        }),
        ParameterKind::Str => Ok(ParameterValue::Str(text.to_string())),
        ParameterKind::File | ParameterKind::Dir => {
            Ok(ParameterValue::Path(PathValue::resolve(text, base_dir)))
        }
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
