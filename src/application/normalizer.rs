// src/application/normalizer.rs
use std::sync::Arc;

use crate::application::{
    error::{Rejected, Rejection},
    ports::DuplicateKeyParserPort,
};
use crate::config::{MalformedCompoundIndex, NormalizerConfig};
use crate::domain::{
    driver::{DuplicateKey, RawError},
    errors::{FieldValue, Fields, MalformedDuplicateKey, NormalizedError},
};

/// Rewrites driver errors into application errors.
///
/// Classification runs in a fixed order and the first match wins:
/// duplicate-key codes, then the driver error name, then pass-through.
#[derive(Clone)]
pub struct ErrorNormalizer {
    config: NormalizerConfig,
    parser: Arc<DuplicateKeyParserPort>,
}

impl ErrorNormalizer {
    pub fn new(config: NormalizerConfig, parser: Arc<DuplicateKeyParserPort>) -> Self {
        Self { config, parser }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Classify `error`. The result is always a rejection; unrecognized
    /// errors come back unchanged inside [`Rejection::Unchanged`].
    pub fn normalize(&self, error: RawError) -> Rejection {
        if error.is_duplicate_key() {
            return match self.duplicate_key(&error.message) {
                Ok(normalized) => {
                    tracing::debug!(
                        code = error.code,
                        message = normalized.message(),
                        "duplicate key error normalized"
                    );
                    Rejection::Normalized(normalized)
                }
                Err(err) => {
                    tracing::warn!(code = error.code, error = %err, "unparseable duplicate key error");
                    Rejection::Malformed(err)
                }
            };
        }

        let Some(kind) = error.driver_name().and_then(|name| name.kind()) else {
            tracing::trace!(code = error.code, name = error.name.as_deref(), "driver error passed through");
            return Rejection::Unchanged(error);
        };

        tracing::debug!(name = error.name.as_deref(), %kind, "driver error reclassified");
        let RawError {
            message, errors, ..
        } = error;
        let mut normalized = NormalizedError::new(kind, message);
        if let Some(errors) = errors {
            let fields = errors
                .into_iter()
                .map(|(field, detail)| (field, FieldValue::Detail(detail)))
                .collect();
            normalized = normalized.with_fields(fields);
        }
        Rejection::Normalized(normalized)
    }

    /// Same as [`normalize`](Self::normalize), shaped as a failed `Result`.
    pub fn reject<T>(&self, error: RawError) -> Rejected<T> {
        Err(self.normalize(error))
    }

    fn duplicate_key(&self, message: &str) -> Result<NormalizedError, MalformedDuplicateKey> {
        if self.parser.is_compound(message) {
            match self.parser.parse_compound(message) {
                Ok(keys) => return Ok(compound_conflict(keys)),
                Err(err) => match self.config.malformed_compound_index() {
                    MalformedCompoundIndex::Fatal => return Err(err),
                    MalformedCompoundIndex::SingleField => {
                        tracing::debug!(error = %err, "falling back to single field extraction");
                    }
                },
            }
        }

        Ok(single_conflict(self.parser.parse_single(message)))
    }
}

impl std::fmt::Debug for ErrorNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorNormalizer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

// Compound values are kept verbatim, "null" included.
fn compound_conflict([first, second]: [DuplicateKey; 2]) -> NormalizedError {
    let message = format!(
        "{{ {}: {}, {}: {} }} already exists.",
        first.field, first.value, second.field, second.value
    );
    let mut fields = Fields::new();
    fields.insert(first.field, FieldValue::Text(first.value));
    fields.insert(second.field, FieldValue::Text(second.value));
    NormalizedError::conflict(message).with_fields(fields)
}

fn single_conflict(key: DuplicateKey) -> NormalizedError {
    let value = FieldValue::from_extracted(&key.value);
    let message = format!("{}: {} already exists.", key.field, value);
    NormalizedError::conflict(message).with_fields(Fields::from([(key.field, value)]))
}
