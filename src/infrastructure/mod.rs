// src/infrastructure/mod.rs
pub mod duplicate_key;

pub use duplicate_key::RegexDuplicateKeyParser;
