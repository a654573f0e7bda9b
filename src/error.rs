//! Analysis errors
//!
//! Zero-variance (degenerate) input is deliberately NOT an error anywhere in
//! the engine: every denominator carries a +1e-8 guard, so constant series
//! produce all-zero metrics instead of NaN/Inf.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifoldError {
    #[error("Insufficient data: need at least {required} samples, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Length mismatch: {what} has {actual} samples but prices has {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Timestamps must be non-decreasing (violation at index {index})")]
    NonMonotonicTimestamps { index: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, ManifoldError>;
