//! Reference range type and the value classification rule.

use crate::error::{RangeError, RangeResult};
use crate::status::ResultStatus;

/// Reference range for a single lab test.
///
/// Holds the interval considered normal plus optional critical thresholds
/// beyond which the result is considered dangerous. Ranges are built once
/// per test code and never mutated afterwards.
///
/// # Example
///
/// ```rust
/// use lab_ranges::{ReferenceRange, ResultStatus};
///
/// let potassium = ReferenceRange::new(3.5, 5.0, "mEq/L")
///     .with_critical_low(2.8)
///     .with_critical_high(6.0);
///
/// assert_eq!(potassium.classify(4.2), ResultStatus::Normal);
/// assert_eq!(potassium.classify(6.5), ResultStatus::CriticalHigh);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceRange {
    /// Lower bound of the normal interval (inclusive).
    pub min: f64,
    /// Upper bound of the normal interval (inclusive).
    pub max: f64,
    /// Threshold below which the value is critically low (exclusive).
    #[cfg_attr(feature = "serde", serde(default))]
    pub critical_low: Option<f64>,
    /// Threshold above which the value is critically high (exclusive).
    #[cfg_attr(feature = "serde", serde(default))]
    pub critical_high: Option<f64>,
    /// Unit label for the measured value (e.g., `"g/dL"`).
    pub unit: String,
}

impl ReferenceRange {
    /// Creates a range with the given normal bounds and no critical
    /// thresholds.
    pub fn new(min: f64, max: f64, unit: impl Into<String>) -> Self {
        Self {
            min,
            max,
            critical_low: None,
            critical_high: None,
            unit: unit.into(),
        }
    }

    /// Sets the critical-low threshold.
    pub fn with_critical_low(mut self, critical_low: f64) -> Self {
        self.critical_low = Some(critical_low);
        self
    }

    /// Sets the critical-high threshold.
    pub fn with_critical_high(mut self, critical_high: f64) -> Self {
        self.critical_high = Some(critical_high);
        self
    }

    /// Classifies a value against this range.
    ///
    /// Checks run in order and the first match wins, so critical thresholds
    /// take precedence over the plain bounds. The normal interval is
    /// inclusive at both ends; the critical comparisons are strict, so a
    /// value equal to `critical_low` classifies as `Low` (and likewise
    /// `critical_high` as `High`).
    ///
    /// Pure: no consistency checks run here, and a malformed range
    /// classifies exactly as its fields dictate. Use [`validate`] to reject
    /// malformed ranges up front.
    ///
    /// [`validate`]: ReferenceRange::validate
    pub fn classify(&self, value: f64) -> ResultStatus {
        if let Some(critical_low) = self.critical_low {
            if value < critical_low {
                return ResultStatus::CriticalLow;
            }
        }
        if let Some(critical_high) = self.critical_high {
            if value > critical_high {
                return ResultStatus::CriticalHigh;
            }
        }
        if value < self.min {
            return ResultStatus::Low;
        }
        if value > self.max {
            return ResultStatus::High;
        }
        ResultStatus::Normal
    }

    /// Returns the human-readable normal-range summary, e.g.
    /// `"Normal range: 13.5-17.5 g/dL"`.
    ///
    /// Integer-valued bounds render without a decimal point
    /// (`"Normal range: 41-53 %"`).
    pub fn summary(&self) -> String {
        format!("Normal range: {}-{} {}", self.min, self.max, self.unit)
    }

    /// Validates the internal consistency of this range.
    ///
    /// Rejects non-finite bounds, `min > max`, a critical-low threshold
    /// above the minimum, and a critical-high threshold below the maximum.
    /// Catalog builders call this so malformed tables are caught at
    /// construction time rather than producing inconsistent
    /// classifications.
    pub fn validate(&self) -> RangeResult<()> {
        for bound in [Some(self.min), Some(self.max), self.critical_low, self.critical_high]
            .into_iter()
            .flatten()
        {
            if !bound.is_finite() {
                return Err(RangeError::NonFiniteBound(bound));
            }
        }
        if self.min > self.max {
            return Err(RangeError::InvalidBounds {
                min: self.min,
                max: self.max,
            });
        }
        if let Some(critical_low) = self.critical_low {
            if critical_low > self.min {
                return Err(RangeError::CriticalLowAboveMin {
                    critical_low,
                    min: self.min,
                });
            }
        }
        if let Some(critical_high) = self.critical_high {
            if critical_high < self.max {
                return Err(RangeError::CriticalHighBelowMax {
                    critical_high,
                    max: self.max,
                });
            }
        }
        Ok(())
    }
}
