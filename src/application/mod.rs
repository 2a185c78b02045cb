pub mod error;
pub mod normalizer;
pub mod ports;

pub use error::{Rejected, Rejection};
pub use normalizer::ErrorNormalizer;
