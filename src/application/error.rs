// src/application/error.rs
use crate::domain::{
    driver::RawError,
    errors::{ErrorKind, MalformedDuplicateKey, NormalizedError},
};
use std::convert::Infallible;
use thiserror::Error;

/// Outcome of normalization. There is no success case.
pub type Rejected<T = Infallible> = Result<T, Rejection>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    /// The driver error was recognized and rewritten.
    #[error(transparent)]
    Normalized(#[from] NormalizedError),

    /// The driver error was not recognized and is handed back as-is.
    #[error(transparent)]
    Unchanged(RawError),

    /// A compound-index duplicate-key message that could not be parsed.
    #[error(transparent)]
    Malformed(#[from] MalformedDuplicateKey),
}

impl Rejection {
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Rejection::Normalized(err) => Some(err.kind()),
            Rejection::Unchanged(_) | Rejection::Malformed(_) => None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Rejection::Normalized(err) => err.message(),
            Rejection::Unchanged(raw) => &raw.message,
            Rejection::Malformed(err) => err.message(),
        }
    }

    pub fn normalized(&self) -> Option<&NormalizedError> {
        match self {
            Rejection::Normalized(err) => Some(err),
            _ => None,
        }
    }

    pub fn unchanged(&self) -> Option<&RawError> {
        match self {
            Rejection::Unchanged(raw) => Some(raw),
            _ => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Rejection::Malformed(_))
    }

    pub fn into_normalized(self) -> Result<NormalizedError, Self> {
        match self {
            Rejection::Normalized(err) => Ok(err),
            other => Err(other),
        }
    }
}
