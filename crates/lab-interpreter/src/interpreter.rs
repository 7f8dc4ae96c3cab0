//! Top-level interpreter: panel lookup and dispatch.

use std::collections::HashMap;

use crate::catalog::TestCatalog;
use crate::error::{InterpreterError, InterpreterResult};
use crate::panels;
use crate::result::TestResult;

/// Main entry point: maps panel codes to catalogs and dispatches
/// interpretation requests.
///
/// Constructed once per process; the panel set is fixed afterwards. Each
/// catalog keeps its own most-recent-result cache, so the interpreter
/// itself needs no synchronization beyond what the catalogs provide.
///
/// # Example
///
/// ```rust
/// use lab_interpreter::{LabInterpreter, ResultStatus};
///
/// let interpreter = LabInterpreter::new();
/// let result = interpreter.interpret("BMP", "Glucose", 250.0)?;
/// assert_eq!(result.status, ResultStatus::High);
/// # Ok::<(), lab_interpreter::InterpreterError>(())
/// ```
#[derive(Debug)]
pub struct LabInterpreter {
    /// Panel codes in registration order.
    panel_order: Vec<String>,
    /// Catalog per panel code.
    panels: HashMap<String, TestCatalog>,
}

impl LabInterpreter {
    /// Creates an interpreter with the built-in panels: Complete Blood
    /// Count (`CBC`), Basic Metabolic Panel (`BMP`), and Lipid Panel
    /// (`LP`).
    pub fn new() -> Self {
        Self::with_panels(vec![
            (panels::codes::CBC.to_string(), panels::complete_blood_count()),
            (panels::codes::BMP.to_string(), panels::basic_metabolic_panel()),
            (panels::codes::LP.to_string(), panels::lipid_panel()),
        ])
    }

    /// Creates an interpreter over an arbitrary set of panels.
    ///
    /// Panels are listed by [`available_tests`](LabInterpreter::available_tests)
    /// in the order given here. Registering a panel code twice replaces its
    /// catalog without changing its position in the listing order, matching
    /// [`TestCatalogBuilder::test`](crate::TestCatalogBuilder::test).
    pub fn with_panels(panel_list: Vec<(String, TestCatalog)>) -> Self {
        let mut panel_order = Vec::with_capacity(panel_list.len());
        let mut panels = HashMap::with_capacity(panel_list.len());
        for (code, catalog) in panel_list {
            if panels.insert(code.clone(), catalog).is_none() {
                panel_order.push(code);
            }
        }
        Self { panel_order, panels }
    }

    /// Returns the catalog registered under a panel code, if any.
    pub fn panel(&self, panel_code: &str) -> Option<&TestCatalog> {
        self.panels.get(panel_code)
    }

    /// Returns the registered panel codes in registration order.
    pub fn panel_codes(&self) -> &[String] {
        &self.panel_order
    }

    /// Interprets a single test result.
    ///
    /// Resolves the catalog for `panel_code` and delegates to
    /// [`TestCatalog::interpret`], propagating its result or error
    /// unchanged.
    ///
    /// # Errors
    ///
    /// - [`InterpreterError::UnknownPanel`] if `panel_code` is not
    ///   registered; no catalog is touched
    /// - Any error from [`TestCatalog::interpret`]
    pub fn interpret(
        &self,
        panel_code: &str,
        test_code: &str,
        value: f64,
    ) -> InterpreterResult<TestResult> {
        let catalog = self
            .panels
            .get(panel_code)
            .ok_or_else(|| InterpreterError::UnknownPanel(panel_code.to_string()))?;
        catalog.interpret(test_code, value)
    }

    /// Returns every panel code with its test codes.
    ///
    /// Panels appear in registration order and test codes in catalog
    /// construction order. Read-only.
    pub fn available_tests(&self) -> Vec<(&str, &[String])> {
        self.panel_order
            .iter()
            .map(|code| (code.as_str(), self.panels[code].test_codes()))
            .collect()
    }
}

impl Default for LabInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lab_ranges::ReferenceRange;

    #[test]
    fn test_unknown_panel_fails_without_delegation() {
        let interpreter = LabInterpreter::new();
        let err = interpreter.interpret("XYZ", "Hemoglobin", 15.0).unwrap_err();
        assert_eq!(err, InterpreterError::UnknownPanel("XYZ".to_string()));
        // No catalog saw the request.
        for code in interpreter.panel_codes() {
            let catalog = interpreter.panel(code).unwrap();
            assert!(catalog.last_result("Hemoglobin").is_none());
        }
    }

    #[test]
    fn test_builtin_panel_codes_in_order() {
        let interpreter = LabInterpreter::new();
        assert_eq!(interpreter.panel_codes(), ["CBC", "BMP", "LP"]);
    }

    #[test]
    fn test_with_panels_preserves_order_and_dispatches() {
        let second = TestCatalog::builder("Second")
            .test("B", ReferenceRange::new(0.0, 1.0, "u"))
            .build()
            .unwrap();
        let first = TestCatalog::builder("First")
            .test("A", ReferenceRange::new(0.0, 1.0, "u"))
            .build()
            .unwrap();
        let interpreter = LabInterpreter::with_panels(vec![
            ("P2".to_string(), second),
            ("P1".to_string(), first),
        ]);

        assert_eq!(interpreter.panel_codes(), ["P2", "P1"]);
        assert!(interpreter.interpret("P1", "A", 0.5).is_ok());
        assert!(interpreter.interpret("P2", "A", 0.5).is_err());
    }

    #[test]
    fn test_duplicate_panel_code_replaces_catalog_keeps_position() {
        let make = |name: &str, code: &str| {
            TestCatalog::builder(name)
                .test(code, ReferenceRange::new(0.0, 1.0, "u"))
                .build()
                .unwrap()
        };
        let interpreter = LabInterpreter::with_panels(vec![
            ("P1".to_string(), make("First", "A")),
            ("P2".to_string(), make("Second", "B")),
            ("P1".to_string(), make("Replacement", "C")),
        ]);

        assert_eq!(interpreter.panel_codes(), ["P1", "P2"]);
        // P1 dispatches to the replacement catalog.
        assert_eq!(interpreter.panel("P1").unwrap().name(), "Replacement");
        assert!(interpreter.interpret("P1", "C", 0.5).is_ok());
        assert!(interpreter.interpret("P1", "A", 0.5).is_err());
        assert_eq!(interpreter.available_tests()[0].1, ["C"]);
    }

    #[test]
    fn test_available_tests_reports_all_panels() {
        let interpreter = LabInterpreter::new();
        let listing = interpreter.available_tests();
        assert_eq!(listing.len(), 3);
        assert_eq!(listing[0].0, "CBC");
        assert_eq!(listing[1].0, "BMP");
        assert_eq!(listing[2].0, "LP");
    }
}
