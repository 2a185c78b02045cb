//! Normalizes document-store driver errors into a small closed set of
//! application errors.
//!
//! Duplicate-key failures (codes 11000 and 11001) become
//! [`ErrorKind::Conflict`] with the offending fields pulled out of the driver
//! message. Known driver error names map onto [`ErrorKind::BadRequest`],
//! [`ErrorKind::Conflict`] or [`ErrorKind::GeneralError`]. Everything else is
//! handed back untouched.
//!
//! ```
//! use store_errors::{ErrorKind, RawError};
//!
//! let raw = RawError::new(
//!     r#"E11000 duplicate key error collection: db.users index: email_1 dup key: { : "a@b.com" }"#,
//! )
//! .with_code(11000);
//!
//! let rejection = store_errors::normalize(raw);
//! assert_eq!(rejection.kind(), Some(ErrorKind::Conflict));
//! assert_eq!(rejection.message(), "email: a@b.com already exists.");
//! ```
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

use std::sync::{Arc, OnceLock};

pub use application::{ErrorNormalizer, Rejected, Rejection};
pub use config::{ConfigError, MalformedCompoundIndex, NormalizerConfig};
pub use domain::{
    driver::{DriverErrorName, RawError},
    errors::{ErrorKind, FieldValue, Fields, MalformedDuplicateKey, NormalizedError},
};

use infrastructure::RegexDuplicateKeyParser;

/// Build a normalizer backed by the regex duplicate-key parser.
pub fn build_normalizer(config: NormalizerConfig) -> ErrorNormalizer {
    ErrorNormalizer::new(config, Arc::new(RegexDuplicateKeyParser::new()))
}

/// Normalize with the default configuration.
pub fn normalize(error: RawError) -> Rejection {
    static DEFAULT: OnceLock<ErrorNormalizer> = OnceLock::new();
    DEFAULT
        .get_or_init(|| build_normalizer(NormalizerConfig::default()))
        .normalize(error)
}
