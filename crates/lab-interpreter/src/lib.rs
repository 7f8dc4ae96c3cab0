//! # lab-interpreter
//!
//! Panel-based interpretation of laboratory test results against reference
//! ranges.
//!
//! An educational decision-support lookup: given a panel code, a test code,
//! and a measured value, the interpreter classifies the value against the
//! test's reference range and attaches a human-readable clinical note. It
//! is **not** a diagnostic system.
//!
//! ## Components
//!
//! - [`LabInterpreter`]: dispatches a request to the right panel
//! - [`TestCatalog`]: one panel's reference ranges, interpretation texts,
//!   and most-recent-result cache
//! - [`TestResult`]: the classified result handed back to the caller
//! - [`panels`]: the built-in CBC / BMP / Lipid Panel tables
//!
//! Statuses and ranges come from the [`lab_ranges`] crate and are
//! re-exported here for convenience.
//!
//! ## Quick start
//!
//! ```rust
//! use lab_interpreter::{LabInterpreter, ResultStatus};
//!
//! let interpreter = LabInterpreter::new();
//!
//! let result = interpreter.interpret("CBC", "Hemoglobin", 15.0)?;
//! assert_eq!(result.status, ResultStatus::Normal);
//! assert_eq!(result.reference_summary, "Normal range: 13.5-17.5 g/dL");
//!
//! let result = interpreter.interpret("BMP", "Potassium", 6.5)?;
//! assert!(result.status.is_critical());
//! # Ok::<(), lab_interpreter::InterpreterError>(())
//! ```
//!
//! ## Custom panels
//!
//! The built-in panels are plain data; custom panels go through the same
//! builder:
//!
//! ```rust
//! use lab_interpreter::{LabInterpreter, ReferenceRange, ResultStatus, TestCatalog};
//!
//! let catalog = TestCatalog::builder("Thyroid Panel")
//!     .test("TSH", ReferenceRange::new(0.4, 4.0, "mIU/L"))
//!     .interpretation("TSH", ResultStatus::High, "Elevated TSH suggests hypothyroidism.")
//!     .build()?;
//!
//! let interpreter = LabInterpreter::with_panels(vec![("TP".to_string(), catalog)]);
//! let result = interpreter.interpret("TP", "TSH", 7.1)?;
//! assert_eq!(result.status, ResultStatus::High);
//! # Ok::<(), lab_interpreter::InterpreterError>(())
//! ```
//!
//! ## Error handling
//!
//! Every failure surfaces as an [`InterpreterError`] to the immediate
//! caller; no partial work is performed and no result is cached on the
//! error paths. Classification itself never fails: it is a total function
//! from a finite value to exactly one [`ResultStatus`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod catalog;
mod error;
mod interpreter;
pub mod panels;
mod result;

pub use catalog::{TestCatalog, TestCatalogBuilder, FALLBACK_INTERPRETATION};
pub use error::{InterpreterError, InterpreterResult};
pub use interpreter::LabInterpreter;
pub use result::TestResult;

// Re-export the leaf types so callers need only one crate.
pub use lab_ranges::{RangeError, ReferenceRange, ResultStatus};
