//! Error types for lab result interpretation.

use lab_ranges::RangeError;
use thiserror::Error;

/// Errors that can occur while building catalogs or interpreting results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpreterError {
    /// Requested panel code is not registered with the interpreter.
    #[error("unknown panel: {0}")]
    UnknownPanel(String),

    /// Requested test code has no reference range in the resolved panel.
    #[error("unknown test code in panel {panel}: {code}")]
    UnknownTestCode {
        /// Panel the lookup ran against.
        panel: String,
        /// The unrecognized test code.
        code: String,
    },

    /// Measured value is NaN or infinite.
    #[error("invalid measurement value: {0}")]
    InvalidValue(f64),

    /// Catalog table defines interpretation text for a code with no range.
    #[error("interpretation entry for test code {code} has no reference range")]
    InterpretationWithoutRange {
        /// The orphaned test code.
        code: String,
    },

    /// A reference range in the catalog table is malformed.
    #[error("malformed range table: {0}")]
    Range(#[from] RangeError),
}

/// Result type for interpreter operations.
pub type InterpreterResult<T> = std::result::Result<T, InterpreterError>;
