// src/application/ports/mod.rs
pub mod duplicate_key;

// Type alias to keep the injection site in the normalizer free of `dyn` noise
pub type DuplicateKeyParserPort = dyn duplicate_key::DuplicateKeyParser;
