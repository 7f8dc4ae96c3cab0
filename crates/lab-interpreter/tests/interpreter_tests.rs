//! Integration tests for the lab result interpreter.
//!
//! Exercises the full dispatch path (interpreter -> catalog -> range)
//! against the built-in panels, including boundary tie-breaks, error paths,
//! and cache behavior.

use lab_interpreter::{
    InterpreterError, LabInterpreter, ResultStatus, FALLBACK_INTERPRETATION,
};

#[test]
fn normal_hemoglobin() {
    let interpreter = LabInterpreter::new();
    let result = interpreter.interpret("CBC", "Hemoglobin", 15.0).unwrap();

    assert_eq!(result.status, ResultStatus::Normal);
    assert_eq!(result.unit, "g/dL");
    assert_eq!(result.reference_summary, "Normal range: 13.5-17.5 g/dL");
    assert!(!result.is_abnormal());
}

#[test]
fn critically_low_hemoglobin() {
    let interpreter = LabInterpreter::new();
    // 6.0 < critical_low 7.0
    let result = interpreter.interpret("CBC", "Hemoglobin", 6.0).unwrap();

    assert_eq!(result.status, ResultStatus::CriticalLow);
    assert!(result.is_critical());
    // The tables key clinical notes under LOW/HIGH only, so a critical
    // status gets the fallback text.
    assert_eq!(result.interpretation, FALLBACK_INTERPRETATION);

    let result = interpreter.interpret("CBC", "Hemoglobin", 12.0).unwrap();
    assert_eq!(result.status, ResultStatus::Low);
    assert_eq!(
        result.interpretation,
        "Low hemoglobin indicates anemia - check MCV to determine type."
    );
}

#[test]
fn critically_high_potassium() {
    let interpreter = LabInterpreter::new();
    // 6.5 > critical_high 6.0
    let result = interpreter.interpret("BMP", "Potassium", 6.5).unwrap();

    assert_eq!(result.status, ResultStatus::CriticalHigh);
    assert_eq!(result.interpretation, FALLBACK_INTERPRETATION);

    // The keyed HIGH text is returned only for a plain High status.
    let result = interpreter.interpret("BMP", "Potassium", 5.5).unwrap();
    assert_eq!(result.status, ResultStatus::High);
    assert_eq!(
        result.interpretation,
        "Hyperkalemia - dangerous for heart; may indicate kidney failure or excessive supplementation."
    );
}

#[test]
fn chloride_has_no_critical_thresholds() {
    let interpreter = LabInterpreter::new();
    let result = interpreter.interpret("BMP", "Chloride", 99.0).unwrap();
    assert_eq!(result.status, ResultStatus::Normal);

    // Far outside the range it still only reaches High.
    let result = interpreter.interpret("BMP", "Chloride", 500.0).unwrap();
    assert_eq!(result.status, ResultStatus::High);
}

#[test]
fn low_hdl() {
    let interpreter = LabInterpreter::new();
    let result = interpreter.interpret("LP", "HDL", 35.0).unwrap();

    assert_eq!(result.status, ResultStatus::Low);
    assert_eq!(
        result.interpretation,
        "Low HDL ('good' cholesterol) increases cardiovascular disease risk."
    );
}

#[test]
fn unknown_panel_is_rejected() {
    let interpreter = LabInterpreter::new();
    let err = interpreter.interpret("XYZ", "Hemoglobin", 15.0).unwrap_err();
    assert_eq!(err, InterpreterError::UnknownPanel("XYZ".to_string()));
}

#[test]
fn unknown_test_code_names_panel_and_code() {
    let interpreter = LabInterpreter::new();
    let err = interpreter.interpret("CBC", "Glucose", 90.0).unwrap_err();
    assert_eq!(
        err,
        InterpreterError::UnknownTestCode {
            panel: "Complete Blood Count (CBC)".to_string(),
            code: "Glucose".to_string(),
        }
    );
    // Nothing was cached for the unknown code.
    let catalog = interpreter.panel("CBC").unwrap();
    assert!(catalog.last_result("Glucose").is_none());
}

#[test]
fn boundary_values_are_normal() {
    let interpreter = LabInterpreter::new();
    assert_eq!(
        interpreter.interpret("CBC", "Hemoglobin", 13.5).unwrap().status,
        ResultStatus::Normal
    );
    assert_eq!(
        interpreter.interpret("CBC", "Hemoglobin", 17.5).unwrap().status,
        ResultStatus::Normal
    );
}

#[test]
fn critical_boundaries_classify_as_plain_low_high() {
    let interpreter = LabInterpreter::new();
    // Equality at the critical threshold is not critical.
    assert_eq!(
        interpreter.interpret("BMP", "Potassium", 2.8).unwrap().status,
        ResultStatus::Low
    );
    assert_eq!(
        interpreter.interpret("BMP", "Potassium", 6.0).unwrap().status,
        ResultStatus::High
    );
    // Just beyond the threshold escalates.
    assert_eq!(
        interpreter.interpret("BMP", "Potassium", 2.79).unwrap().status,
        ResultStatus::CriticalLow
    );
    assert_eq!(
        interpreter.interpret("BMP", "Potassium", 6.01).unwrap().status,
        ResultStatus::CriticalHigh
    );
}

#[test]
fn repeat_interpretation_overwrites_cached_result() {
    let interpreter = LabInterpreter::new();
    interpreter.interpret("BMP", "Glucose", 250.0).unwrap();
    let second = interpreter.interpret("BMP", "Glucose", 85.0).unwrap();

    let catalog = interpreter.panel("BMP").unwrap();
    let cached = catalog.last_result("Glucose").unwrap();
    assert_eq!(cached, second);
    assert_eq!(cached.status, ResultStatus::Normal);
}

#[test]
fn non_finite_value_is_rejected_before_classification() {
    let interpreter = LabInterpreter::new();
    assert!(matches!(
        interpreter.interpret("BMP", "Glucose", f64::NAN),
        Err(InterpreterError::InvalidValue(_))
    ));
    assert!(matches!(
        interpreter.interpret("BMP", "Glucose", f64::INFINITY),
        Err(InterpreterError::InvalidValue(_))
    ));
}

#[test]
fn interpretation_falls_back_when_table_has_no_entry() {
    let interpreter = LabInterpreter::new();
    // CO2 has a range but no interpretation table.
    let result = interpreter.interpret("BMP", "CO2", 35.0).unwrap();
    assert_eq!(result.status, ResultStatus::High);
    assert_eq!(result.interpretation, FALLBACK_INTERPRETATION);

    // WBC has LOW/HIGH texts but none for the critical statuses.
    let result = interpreter.interpret("CBC", "WBC", 1.0).unwrap();
    assert_eq!(result.status, ResultStatus::CriticalLow);
    assert_eq!(result.interpretation, FALLBACK_INTERPRETATION);
}

#[test]
fn available_tests_lists_every_panel_in_order() {
    let interpreter = LabInterpreter::new();
    let listing = interpreter.available_tests();

    let panels: Vec<&str> = listing.iter().map(|(code, _)| *code).collect();
    assert_eq!(panels, ["CBC", "BMP", "LP"]);

    let (_, cbc_codes) = &listing[0];
    assert_eq!(
        *cbc_codes,
        ["WBC", "RBC", "Hemoglobin", "Hematocrit", "MCV", "Platelets"]
    );
    let (_, lp_codes) = &listing[2];
    assert_eq!(*lp_codes, ["Total_Cholesterol", "LDL", "HDL", "Triglycerides"]);
}

#[cfg(feature = "serde")]
#[test]
fn serialized_results_use_canonical_status_names() {
    let interpreter = LabInterpreter::new();
    let result = interpreter.interpret("CBC", "WBC", 1.0).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["status"], "CRITICAL_LOW");
    assert_eq!(json["unit"], "10^3/µL");
    assert_eq!(json["reference_range"]["critical_low"], 2.0);
}

#[test]
fn result_carries_the_consulted_range() {
    let interpreter = LabInterpreter::new();
    let result = interpreter.interpret("CBC", "Platelets", 30.0).unwrap();

    assert_eq!(result.status, ResultStatus::CriticalLow);
    assert_eq!(result.reference_range.min, 150.0);
    assert_eq!(result.reference_range.max, 400.0);
    assert_eq!(result.reference_range.critical_low, Some(50.0));
    assert_eq!(result.reference_summary, "Normal range: 150-400 10^3/µL");
}
