// tests/support/builders.rs
use serde_json::{Map, Value};
use store_errors::RawError;

pub const EMAIL_DUPLICATE: &str =
    r#"E11000 duplicate key error collection: db.users index: email_1 dup key: { : "a@b.com" }"#;

pub const NAME_DUPLICATE: &str = r#"E11000 duplicate key error collection: db.people index: first_1_last_1 dup key: { : "John", : "Doe" }"#;

/// Compound index message in the newer `{ field: value }` layout, which the
/// compound grammar cannot read.
pub const NAME_DUPLICATE_NAMED_VALUES: &str = r#"E11000 duplicate key error collection: db.people index: first_1_last_1 dup key: { first: "John", last: "Doe" }"#;

pub fn nick_duplicate(value: &str) -> String {
    format!("E11000 duplicate key error collection: db.users index: nick_1 dup key: {{ : {value} }}")
}

pub struct RawErrorBuilder {
    code: Option<i64>,
    name: Option<String>,
    message: String,
    errors: Option<Map<String, Value>>,
}

impl RawErrorBuilder {
    pub fn new() -> Self {
        Self {
            code: None,
            name: None,
            message: "driver failure".into(),
            errors: None,
        }
    }

    /// A duplicate-key error as the wire driver reports it.
    pub fn duplicate_key(message: impl Into<String>) -> Self {
        Self::new().code(11000).name("MongoError").message(message)
    }

    pub fn code(mut self, code: i64) -> Self {
        self.code = Some(code);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn errors(mut self, errors: Value) -> Self {
        self.errors = match errors {
            Value::Object(map) => Some(map),
            _ => None,
        };
        self
    }

    pub fn build(self) -> RawError {
        let mut raw = RawError::new(self.message);
        raw.code = self.code;
        raw.name = self.name;
        raw.errors = self.errors;
        raw
    }
}
