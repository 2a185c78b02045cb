// src/infrastructure/duplicate_key.rs
use std::sync::OnceLock;

use regex::Regex;

use crate::application::ports::duplicate_key::DuplicateKeyParser;
use crate::domain::{driver::DuplicateKey, errors::MalformedDuplicateKey};

// Index names are `<field>_<direction>`; two fields means `a_1_b_1`. A field
// whose own name contains `_<digit>_` (e.g. `user_1_name`) is misread as two.
const COMPOUND_INDEX: &str =
    r"(?i)^.*collection:.*index:\s[0-9A-Za-z_]*_[0-9]_[0-9A-Za-z_]*_[0-9]\s*dup key";
const COMPOUND_KEYS: &str = r"(?i)index:\s([0-9A-Za-z_]*)_[0-9]_([0-9A-Za-z_]*)_[0-9]\s*dup key";
const COMPOUND_VALUES: &str = r#"(?i)\s*dup key:\s*\{\s*:\s*"(.*)",\s*:\s*"(.*)"\s*\}"#;
const SINGLE_KEY: &str = r"(?i)_?([a-zA-Z]*)_?[0-9]?\s*dup key";
const SINGLE_VALUE: &str = r#"(?i)\s*dup key:\s*\{\s*:\s*"?(.*?)"?\s*\}"#;

const DEFAULT_FIELD: &str = "path";
const DEFAULT_VALUE: &str = "value";

static COMPOUND_INDEX_RE: OnceLock<Regex> = OnceLock::new();
static COMPOUND_KEYS_RE: OnceLock<Regex> = OnceLock::new();
static COMPOUND_VALUES_RE: OnceLock<Regex> = OnceLock::new();
static SINGLE_KEY_RE: OnceLock<Regex> = OnceLock::new();
static SINGLE_VALUE_RE: OnceLock<Regex> = OnceLock::new();

fn compiled(cell: &'static OnceLock<Regex>, pattern: &'static str) -> &'static Regex {
    cell.get_or_init(|| {
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("duplicate key regex failed to compile: {error}"))
    })
}

/// Parses the legacy `E11000` message layout:
///
/// ```text
/// E11000 duplicate key error collection: db.users index: email_1 dup key: { : "a@b.com" }
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexDuplicateKeyParser;

impl RegexDuplicateKeyParser {
    pub fn new() -> Self {
        Self
    }
}

impl DuplicateKeyParser for RegexDuplicateKeyParser {
    fn is_compound(&self, message: &str) -> bool {
        compiled(&COMPOUND_INDEX_RE, COMPOUND_INDEX).is_match(message)
    }

    fn parse_compound(&self, message: &str) -> Result<[DuplicateKey; 2], MalformedDuplicateKey> {
        let malformed = || MalformedDuplicateKey::new(message);

        let keys = compiled(&COMPOUND_KEYS_RE, COMPOUND_KEYS)
            .captures(message)
            .ok_or_else(malformed)?;
        let values = compiled(&COMPOUND_VALUES_RE, COMPOUND_VALUES)
            .captures(message)
            .ok_or_else(malformed)?;

        let group = |caps: &regex::Captures<'_>, index: usize| {
            caps.get(index)
                .map(|m| m.as_str().to_string())
                .ok_or_else(malformed)
        };

        Ok([
            DuplicateKey::new(group(&keys, 1)?, group(&values, 1)?),
            DuplicateKey::new(group(&keys, 2)?, group(&values, 2)?),
        ])
    }

    fn parse_single(&self, message: &str) -> DuplicateKey {
        let capture = |re: &Regex| {
            re.captures(message)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        };

        let field = capture(compiled(&SINGLE_KEY_RE, SINGLE_KEY))
            .unwrap_or_else(|| DEFAULT_FIELD.to_string());
        let value = capture(compiled(&SINGLE_VALUE_RE, SINGLE_VALUE))
            .unwrap_or_else(|| DEFAULT_VALUE.to_string());

        DuplicateKey::new(field, value)
    }
}
