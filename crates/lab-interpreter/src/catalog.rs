//! Test catalog: one panel's ranges, interpretation texts, and result cache.

use std::collections::HashMap;

use lab_ranges::{ReferenceRange, ResultStatus};
use parking_lot::RwLock;

use crate::error::{InterpreterError, InterpreterResult};
use crate::result::TestResult;

/// Interpretation text used when a (test code, status) pair has no entry in
/// the catalog's interpretation table.
pub const FALLBACK_INTERPRETATION: &str = "See reference ranges.";

/// One panel of lab tests: reference ranges, interpretation texts, and the
/// most recent result per test code.
///
/// Catalogs are built once through [`TestCatalogBuilder`] and are read-only
/// afterwards except for the result cache, which is guarded by a lock so
/// [`interpret`](TestCatalog::interpret) takes `&self` and catalogs can be
/// shared across threads.
///
/// # Example
///
/// ```rust
/// use lab_interpreter::{ReferenceRange, ResultStatus, TestCatalog};
///
/// let catalog = TestCatalog::builder("Thyroid Panel")
///     .test("TSH", ReferenceRange::new(0.4, 4.0, "mIU/L"))
///     .interpretation("TSH", ResultStatus::Low, "Suppressed TSH suggests hyperthyroidism.")
///     .build()?;
///
/// let result = catalog.interpret("TSH", 0.1)?;
/// assert_eq!(result.status, ResultStatus::Low);
/// # Ok::<(), lab_interpreter::InterpreterError>(())
/// ```
#[derive(Debug)]
pub struct TestCatalog {
    /// Display name of the panel.
    name: String,
    /// Test codes in construction order.
    codes: Vec<String>,
    /// Reference range per test code.
    ranges: HashMap<String, ReferenceRange>,
    /// Interpretation text per (test code, status).
    interpretations: HashMap<String, HashMap<ResultStatus, String>>,
    /// Most recent result per test code, last-write-wins.
    results: RwLock<HashMap<String, TestResult>>,
}

impl TestCatalog {
    /// Creates a builder for a catalog with the given panel name.
    pub fn builder(name: impl Into<String>) -> TestCatalogBuilder {
        TestCatalogBuilder {
            name: name.into(),
            codes: Vec::new(),
            ranges: HashMap::new(),
            interpretations: HashMap::new(),
        }
    }

    /// Returns the panel's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the test codes of this panel in construction order.
    pub fn test_codes(&self) -> &[String] {
        &self.codes
    }

    /// Returns the reference range for a test code, if known.
    pub fn range(&self, test_code: &str) -> Option<&ReferenceRange> {
        self.ranges.get(test_code)
    }

    /// Returns a copy of the most recent result for a test code, if any
    /// interpretation has run for it.
    pub fn last_result(&self, test_code: &str) -> Option<TestResult> {
        self.results.read().get(test_code).cloned()
    }

    /// Interprets a single measured value.
    ///
    /// Classifies `value` against the test's reference range, attaches the
    /// interpretation text for the computed status (or
    /// [`FALLBACK_INTERPRETATION`] when the table has no entry), caches the
    /// result under `test_code` and returns it.
    ///
    /// # Errors
    ///
    /// - [`InterpreterError::InvalidValue`] if `value` is NaN or infinite
    /// - [`InterpreterError::UnknownTestCode`] if `test_code` has no
    ///   reference range in this panel
    ///
    /// Nothing is cached on either error path.
    pub fn interpret(&self, test_code: &str, value: f64) -> InterpreterResult<TestResult> {
        if !value.is_finite() {
            return Err(InterpreterError::InvalidValue(value));
        }

        let range = self
            .ranges
            .get(test_code)
            .ok_or_else(|| InterpreterError::UnknownTestCode {
                panel: self.name.clone(),
                code: test_code.to_string(),
            })?;

        let status = range.classify(value);
        let interpretation = self
            .interpretations
            .get(test_code)
            .and_then(|by_status| by_status.get(&status))
            .map(String::as_str)
            .unwrap_or(FALLBACK_INTERPRETATION);

        let result = TestResult {
            test_code: test_code.to_string(),
            value,
            unit: range.unit.clone(),
            reference_range: range.clone(),
            status,
            interpretation: interpretation.to_string(),
            reference_summary: range.summary(),
        };

        self.results
            .write()
            .insert(test_code.to_string(), result.clone());

        Ok(result)
    }
}

/// Builder for [`TestCatalog`].
///
/// Collects ranges and interpretation texts, then validates the whole table
/// at [`build`](TestCatalogBuilder::build): every range must be internally
/// consistent and every interpretation entry must refer to a test code that
/// has a range. The reverse is not required; a range without interpretation
/// text falls back to [`FALLBACK_INTERPRETATION`] at lookup time.
#[derive(Debug, Clone)]
pub struct TestCatalogBuilder {
    name: String,
    codes: Vec<String>,
    ranges: HashMap<String, ReferenceRange>,
    interpretations: HashMap<String, HashMap<ResultStatus, String>>,
}

impl TestCatalogBuilder {
    /// Registers a test code with its reference range.
    ///
    /// Re-registering a code replaces its range without changing its
    /// position in the construction order.
    pub fn test(mut self, code: impl Into<String>, range: ReferenceRange) -> Self {
        let code = code.into();
        if self.ranges.insert(code.clone(), range).is_none() {
            self.codes.push(code);
        }
        self
    }

    /// Registers interpretation text for a (test code, status) pair.
    pub fn interpretation(
        mut self,
        code: impl Into<String>,
        status: ResultStatus,
        text: impl Into<String>,
    ) -> Self {
        self.interpretations
            .entry(code.into())
            .or_default()
            .insert(status, text.into());
        self
    }

    /// Validates the collected tables and builds the catalog.
    ///
    /// # Errors
    ///
    /// - [`InterpreterError::Range`] if any range fails
    ///   [`ReferenceRange::validate`]
    /// - [`InterpreterError::InterpretationWithoutRange`] if interpretation
    ///   text refers to a code with no range
    pub fn build(self) -> InterpreterResult<TestCatalog> {
        for code in &self.codes {
            self.ranges[code].validate()?;
        }
        for code in self.interpretations.keys() {
            if !self.ranges.contains_key(code) {
                return Err(InterpreterError::InterpretationWithoutRange {
                    code: code.clone(),
                });
            }
        }
        Ok(TestCatalog {
            name: self.name,
            codes: self.codes,
            ranges: self.ranges,
            interpretations: self.interpretations,
            results: RwLock::new(HashMap::new()),
        })
    }
}
