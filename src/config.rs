// src/config.rs
use std::{env, str::FromStr};
use thiserror::Error;

const MALFORMED_COMPOUND_INDEX_VAR: &str = "STORE_ERRORS_MALFORMED_COMPOUND_INDEX";

/// What to do when a compound-index duplicate-key message cannot be parsed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MalformedCompoundIndex {
    /// Reject with [`crate::Rejection::Malformed`].
    #[default]
    Fatal,
    /// Retry the message with the single-field extraction.
    SingleField,
}

impl MalformedCompoundIndex {
    pub fn as_str(&self) -> &'static str {
        match self {
            MalformedCompoundIndex::Fatal => "fatal",
            MalformedCompoundIndex::SingleField => "single-field",
        }
    }
}

impl FromStr for MalformedCompoundIndex {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fatal" => Ok(MalformedCompoundIndex::Fatal),
            "single-field" | "single_field" => Ok(MalformedCompoundIndex::SingleField),
            other => Err(ConfigError::Invalid(format!(
                "{MALFORMED_COMPOUND_INDEX_VAR} must be 'fatal' or 'single-field', got '{other}'"
            ))),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NormalizerConfig {
    malformed_compound_index: MalformedCompoundIndex,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl NormalizerConfig {
    pub fn new(malformed_compound_index: MalformedCompoundIndex) -> Self {
        Self {
            malformed_compound_index,
        }
    }

    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let malformed_compound_index = lookup(MALFORMED_COMPOUND_INDEX_VAR)
            .map(|value| value.parse::<MalformedCompoundIndex>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            malformed_compound_index,
        })
    }

    pub fn malformed_compound_index(&self) -> MalformedCompoundIndex {
        self.malformed_compound_index
    }
}
