// src/domain/errors.rs
use serde::Serialize;
use serde_json::{Map, Value};
use std::{collections::BTreeMap, fmt};
use thiserror::Error;

/// Closed set of application error kinds a driver error can be reclassified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    BadRequest,
    Conflict,
    GeneralError,
}

impl ErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "BadRequest",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::GeneralError => "GeneralError",
        }
    }

    /// Kebab-case identifier used in serialized error payloads.
    pub fn class_name(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "bad-request",
            ErrorKind::Conflict => "conflict",
            ErrorKind::GeneralError => "general-error",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Value attached to a field of a normalized error.
///
/// `Null` and `Undefined` are distinct: the driver prints both as bare words
/// inside a duplicate-key message and callers may need to tell them apart.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Null,
    Undefined,
    /// Structured detail passed through from the driver (e.g. a validator error).
    Detail(Value),
}

impl FieldValue {
    /// Interpret a value extracted from a duplicate-key message.
    pub fn from_extracted(raw: &str) -> Self {
        match raw {
            "null" => FieldValue::Null,
            "undefined" => FieldValue::Undefined,
            other => FieldValue::Text(other.to_string()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// JSON form of the value. `Undefined` has none.
    pub fn to_json(&self) -> Option<Value> {
        match self {
            FieldValue::Text(text) => Some(Value::String(text.clone())),
            FieldValue::Null => Some(Value::Null),
            FieldValue::Undefined => None,
            FieldValue::Detail(value) => Some(value.clone()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => f.write_str(text),
            FieldValue::Null => f.write_str("null"),
            FieldValue::Undefined => f.write_str("undefined"),
            FieldValue::Detail(Value::String(text)) => f.write_str(text),
            FieldValue::Detail(value) => write!(f, "{value}"),
        }
    }
}

pub type Fields = BTreeMap<String, FieldValue>;

/// A driver error rewritten into one of the application [`ErrorKind`]s.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct NormalizedError {
    kind: ErrorKind,
    message: String,
    fields: Option<Fields>,
}

impl NormalizedError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            fields: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    pub fn general_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::GeneralError, message)
    }

    pub fn with_fields(mut self, fields: Fields) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn fields(&self) -> Option<&Fields> {
        self.fields.as_ref()
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.as_ref().and_then(|fields| fields.get(name))
    }

    /// Fields as a JSON object, leaving out `Undefined` entries.
    pub fn fields_json(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .flatten()
            .filter_map(|(name, value)| value.to_json().map(|json| (name.clone(), json)))
            .collect()
    }
}

/// A compound-index duplicate-key message whose fields or values could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed compound index duplicate key message: {message}")]
pub struct MalformedDuplicateKey {
    message: String,
}

impl MalformedDuplicateKey {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The driver message that failed to parse.
    pub fn message(&self) -> &str {
        &self.message
    }
}
