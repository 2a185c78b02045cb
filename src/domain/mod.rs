// src/domain/mod.rs
pub mod driver;
pub mod errors;
