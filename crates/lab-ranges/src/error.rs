//! Error types for reference-range validation.

use thiserror::Error;

/// Errors produced when validating a reference range.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    /// A bound or threshold is NaN or infinite.
    #[error("non-finite range bound: {0}")]
    NonFiniteBound(f64),

    /// The normal interval is inverted.
    #[error("invalid reference range: min {min} exceeds max {max}")]
    InvalidBounds {
        /// Lower bound of the normal interval.
        min: f64,
        /// Upper bound of the normal interval.
        max: f64,
    },

    /// The critical-low threshold sits inside the normal interval.
    #[error("critical-low threshold {critical_low} exceeds range minimum {min}")]
    CriticalLowAboveMin {
        /// The offending critical-low threshold.
        critical_low: f64,
        /// Lower bound of the normal interval.
        min: f64,
    },

    /// The critical-high threshold sits inside the normal interval.
    #[error("critical-high threshold {critical_high} is below range maximum {max}")]
    CriticalHighBelowMax {
        /// The offending critical-high threshold.
        critical_high: f64,
        /// Upper bound of the normal interval.
        max: f64,
    },
}

/// Result type for reference-range operations.
pub type RangeResult<T> = std::result::Result<T, RangeError>;
