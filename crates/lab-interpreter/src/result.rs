//! Result type for a single interpreted lab test.

use lab_ranges::{ReferenceRange, ResultStatus};

/// A single interpreted test result.
///
/// Created fresh per interpretation call and never mutated afterwards. The
/// owning catalog also caches the most recent result per test code; see
/// [`TestCatalog::last_result`](crate::TestCatalog::last_result).
///
/// # Example
///
/// ```rust
/// use lab_interpreter::{LabInterpreter, ResultStatus};
///
/// let interpreter = LabInterpreter::new();
/// let result = interpreter.interpret("LP", "HDL", 35.0)?;
///
/// assert_eq!(result.status, ResultStatus::Low);
/// assert_eq!(result.unit, "mg/dL");
/// assert!(result.is_abnormal());
/// # Ok::<(), lab_interpreter::InterpreterError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestResult {
    /// Test code the measurement was interpreted under.
    pub test_code: String,
    /// The measured value.
    pub value: f64,
    /// Unit label, taken from the reference range.
    pub unit: String,
    /// The reference range the value was classified against.
    pub reference_range: ReferenceRange,
    /// Computed classification status.
    pub status: ResultStatus,
    /// Clinical note for (test code, status), or the fixed fallback text.
    pub interpretation: String,
    /// Human-readable normal-range summary, e.g.
    /// `"Normal range: 13.5-17.5 g/dL"`.
    pub reference_summary: String,
}

impl TestResult {
    /// Returns true if the status is critically low or critically high.
    pub fn is_critical(&self) -> bool {
        self.status.is_critical()
    }

    /// Returns true if the status is anything other than normal.
    pub fn is_abnormal(&self) -> bool {
        self.status.is_abnormal()
    }
}
