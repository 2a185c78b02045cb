// src/application/ports/duplicate_key.rs
use crate::domain::{driver::DuplicateKey, errors::MalformedDuplicateKey};

/// Extracts field names and conflicting values from a duplicate-key message.
///
/// The driver only reports the index name and the offending values as free
/// text, so any implementation is a best-effort grammar over that text.
pub trait DuplicateKeyParser: Send + Sync {
    /// Whether the message names a unique index spanning two fields.
    fn is_compound(&self, message: &str) -> bool;

    fn parse_compound(&self, message: &str) -> Result<[DuplicateKey; 2], MalformedDuplicateKey>;

    /// Single-field extraction. Never fails: missing parts fall back to placeholders.
    fn parse_single(&self, message: &str) -> DuplicateKey;
}
