//! Build errors for engine configuration.

use thiserror::Error;

/// Errors that can occur when building a calculator engine.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("History capacity must be at least 1")]
    ZeroHistoryCapacity,

    #[error("Precision {requested} exceeds the supported maximum of {max} decimals")]
    PrecisionTooLarge { requested: usize, max: usize },

    #[error("Snap tolerance must be finite and non-negative, got {0}")]
    InvalidSnapTolerance(f64),
}
