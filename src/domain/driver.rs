// src/domain/driver.rs
use crate::domain::errors::ErrorKind;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// Driver code for a unique index violation on insert.
pub const DUPLICATE_KEY: i64 = 11000;
/// Driver code for a unique index violation on update (legacy servers).
pub const DUPLICATE_KEY_ON_UPDATE: i64 = 11001;

pub fn is_duplicate_key_code(code: i64) -> bool {
    code == DUPLICATE_KEY || code == DUPLICATE_KEY_ON_UPDATE
}

/// Error value as reported by the document-store driver.
///
/// Every field is optional on the wire; a missing message reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct RawError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Map<String, Value>>,
}

impl RawError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_errors(mut self, errors: Map<String, Value>) -> Self {
        self.errors = Some(errors);
        self
    }

    pub fn is_duplicate_key(&self) -> bool {
        self.code.is_some_and(is_duplicate_key_code)
    }

    pub fn driver_name(&self) -> Option<DriverErrorName> {
        self.name.as_deref().map(DriverErrorName::parse)
    }
}

/// Upstream error categories, decoded from the driver's string tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DriverErrorName {
    Validation,
    Validator,
    Cast,
    Version,
    OverwriteModel,
    MissingSchema,
    DivergentArray,
    /// Generic error raised by the wire driver itself.
    Mongo,
    Other(String),
}

impl DriverErrorName {
    pub fn parse(name: &str) -> Self {
        match name {
            "ValidationError" => DriverErrorName::Validation,
            "ValidatorError" => DriverErrorName::Validator,
            "CastError" => DriverErrorName::Cast,
            "VersionError" => DriverErrorName::Version,
            "OverwriteModelError" => DriverErrorName::OverwriteModel,
            "MissingSchemaError" => DriverErrorName::MissingSchema,
            "DivergentArrayError" => DriverErrorName::DivergentArray,
            "MongoError" => DriverErrorName::Mongo,
            other => DriverErrorName::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DriverErrorName::Validation => "ValidationError",
            DriverErrorName::Validator => "ValidatorError",
            DriverErrorName::Cast => "CastError",
            DriverErrorName::Version => "VersionError",
            DriverErrorName::OverwriteModel => "OverwriteModelError",
            DriverErrorName::MissingSchema => "MissingSchemaError",
            DriverErrorName::DivergentArray => "DivergentArrayError",
            DriverErrorName::Mongo => "MongoError",
            DriverErrorName::Other(name) => name,
        }
    }

    /// Kind this category is reclassified into, `None` when it passes through.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            DriverErrorName::Validation
            | DriverErrorName::Validator
            | DriverErrorName::Cast
            | DriverErrorName::Version => Some(ErrorKind::BadRequest),
            DriverErrorName::OverwriteModel => Some(ErrorKind::Conflict),
            DriverErrorName::MissingSchema
            | DriverErrorName::DivergentArray
            | DriverErrorName::Mongo => Some(ErrorKind::GeneralError),
            DriverErrorName::Other(_) => None,
        }
    }
}

impl From<&str> for DriverErrorName {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for DriverErrorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A field name and its conflicting value as extracted from a duplicate-key message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateKey {
    pub field: String,
    pub value: String,
}

impl DuplicateKey {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_table() {
        let cases = [
            ("ValidationError", Some(ErrorKind::BadRequest)),
            ("ValidatorError", Some(ErrorKind::BadRequest)),
            ("CastError", Some(ErrorKind::BadRequest)),
            ("VersionError", Some(ErrorKind::BadRequest)),
            ("OverwriteModelError", Some(ErrorKind::Conflict)),
            ("MissingSchemaError", Some(ErrorKind::GeneralError)),
            ("DivergentArrayError", Some(ErrorKind::GeneralError)),
            ("MongoError", Some(ErrorKind::GeneralError)),
            ("TypeError", None),
            ("validationerror", None),
        ];
        for (name, expected) in cases {
            let parsed = DriverErrorName::parse(name);
            assert_eq!(parsed.kind(), expected, "{name}");
            assert_eq!(parsed.as_str(), name);
        }
    }

    #[test]
    fn duplicate_key_codes() {
        assert!(RawError::new("x").with_code(11000).is_duplicate_key());
        assert!(RawError::new("x").with_code(11001).is_duplicate_key());
        assert!(!RawError::new("x").with_code(11002).is_duplicate_key());
        assert!(!RawError::new("x").is_duplicate_key());
    }

    #[test]
    fn deserializes_driver_shape() {
        let raw: RawError = serde_json::from_value(json!({
            "name": "MongoError",
            "code": 11000,
            "message": "E11000 duplicate key error"
        }))
        .unwrap();
        assert_eq!(raw.code, Some(11000));
        assert_eq!(raw.driver_name(), Some(DriverErrorName::Mongo));
        assert!(raw.errors.is_none());

        let bare: RawError = serde_json::from_value(json!({})).unwrap();
        assert_eq!(bare, RawError::default());
    }
}
