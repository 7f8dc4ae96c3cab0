//! Status classification for lab result values.

use std::fmt;

/// Status of a lab result compared to its reference range.
///
/// Exactly one status is produced per classification. The critical states
/// take precedence over the plain `Low`/`High` states whenever the value
/// crosses a defined critical threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ResultStatus {
    /// Value is within the reference range (inclusive at both bounds).
    Normal,
    /// Value is below the reference minimum.
    Low,
    /// Value is above the reference maximum.
    High,
    /// Value is below the critical-low threshold.
    CriticalLow,
    /// Value is above the critical-high threshold.
    CriticalHigh,
}

impl ResultStatus {
    /// Returns the canonical upper-snake name for this status.
    ///
    /// These names key interpretation tables and appear in reports, so they
    /// are stable.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultStatus::Normal => "NORMAL",
            ResultStatus::Low => "LOW",
            ResultStatus::High => "HIGH",
            ResultStatus::CriticalLow => "CRITICAL_LOW",
            ResultStatus::CriticalHigh => "CRITICAL_HIGH",
        }
    }

    /// Returns true for `CriticalLow` and `CriticalHigh`.
    pub fn is_critical(&self) -> bool {
        matches!(self, ResultStatus::CriticalLow | ResultStatus::CriticalHigh)
    }

    /// Returns true for any status other than `Normal`.
    pub fn is_abnormal(&self) -> bool {
        !matches!(self, ResultStatus::Normal)
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
