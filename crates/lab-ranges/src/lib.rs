//! # lab-ranges
//!
//! Reference ranges and status classification for laboratory test values.
//!
//! This crate provides the leaf types of the lab result interpreter:
//! - [`ReferenceRange`]: the numeric interval considered normal for a test,
//!   with optional critical thresholds
//! - [`ResultStatus`]: the five-state classification of a measured value
//!
//! Classification is a pure function of the range and the value; the
//! dispatch layer (panels, interpretation text, result caching) lives in
//! the `lab-interpreter` crate.
//!
//! ## Classification rule
//!
//! Checks run in order; the first match wins:
//!
//! | Condition | Status |
//! |-----------|--------|
//! | `value < critical_low` (when defined) | `CriticalLow` |
//! | `value > critical_high` (when defined) | `CriticalHigh` |
//! | `value < min` | `Low` |
//! | `value > max` | `High` |
//! | otherwise | `Normal` |
//!
//! The plain bounds are inclusive, so `classify(min)` and `classify(max)`
//! are both `Normal`. The critical comparisons are strict, so a value
//! sitting exactly on `critical_low` classifies as `Low`, not
//! `CriticalLow`.
//!
//! ## Usage
//!
//! ```rust
//! use lab_ranges::{ReferenceRange, ResultStatus};
//!
//! let hemoglobin = ReferenceRange::new(13.5, 17.5, "g/dL")
//!     .with_critical_low(7.0)
//!     .with_critical_high(20.0);
//!
//! assert_eq!(hemoglobin.classify(15.0), ResultStatus::Normal);
//! assert_eq!(hemoglobin.classify(12.0), ResultStatus::Low);
//! assert_eq!(hemoglobin.classify(6.0), ResultStatus::CriticalLow);
//! assert_eq!(hemoglobin.summary(), "Normal range: 13.5-17.5 g/dL");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod range;
mod status;

pub use error::{RangeError, RangeResult};
pub use range::ReferenceRange;
pub use status::ResultStatus;
