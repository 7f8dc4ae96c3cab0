//! Built-in panel tables.
//!
//! Three standard panels with fixed reference ranges, critical thresholds,
//! and interpretation texts. The tables are process-wide constant data;
//! [`LabInterpreter::new`](crate::LabInterpreter::new) registers them once
//! at startup under the codes in [`codes`].
//!
//! Interpretation coverage is deliberately uneven: some tests carry no
//! clinical note for some statuses (or at all), in which case lookups fall
//! back to [`FALLBACK_INTERPRETATION`](crate::FALLBACK_INTERPRETATION).

use lab_ranges::{ReferenceRange, ResultStatus};

use crate::catalog::TestCatalog;

/// Panel codes the built-in catalogs are registered under.
pub mod codes {
    /// Complete Blood Count.
    pub const CBC: &str = "CBC";

    /// Basic Metabolic Panel.
    pub const BMP: &str = "BMP";

    /// Lipid Panel.
    pub const LP: &str = "LP";
}

/// Complete Blood Count (CBC) - measures different blood cell types.
pub fn complete_blood_count() -> TestCatalog {
    TestCatalog::builder("Complete Blood Count (CBC)")
        .test(
            "WBC",
            ReferenceRange::new(4.5, 11.0, "10^3/µL")
                .with_critical_low(2.0)
                .with_critical_high(20.0),
        )
        .test(
            "RBC",
            ReferenceRange::new(4.5, 5.9, "10^6/µL")
                .with_critical_low(2.0)
                .with_critical_high(7.0),
        )
        .test(
            "Hemoglobin",
            ReferenceRange::new(13.5, 17.5, "g/dL")
                .with_critical_low(7.0)
                .with_critical_high(20.0),
        )
        .test(
            "Hematocrit",
            ReferenceRange::new(41.0, 53.0, "%")
                .with_critical_low(20.0)
                .with_critical_high(70.0),
        )
        .test("MCV", ReferenceRange::new(80.0, 100.0, "fL"))
        .test(
            "Platelets",
            ReferenceRange::new(150.0, 400.0, "10^3/µL")
                .with_critical_low(50.0)
                .with_critical_high(800.0),
        )
        .interpretation(
            "WBC",
            ResultStatus::High,
            "Elevated white blood cells may indicate infection, inflammation, or leukemia.",
        )
        .interpretation(
            "WBC",
            ResultStatus::Low,
            "Low white blood cells may indicate bone marrow disorder, autoimmune disease, or medication side effects.",
        )
        .interpretation(
            "RBC",
            ResultStatus::High,
            "Elevated RBC may indicate dehydration, polycythemia, or chronic hypoxia.",
        )
        .interpretation(
            "RBC",
            ResultStatus::Low,
            "Low RBC may indicate anemia, blood loss, or bone marrow failure.",
        )
        .interpretation(
            "Hemoglobin",
            ResultStatus::High,
            "Elevated hemoglobin may indicate dehydration or polycythemia.",
        )
        .interpretation(
            "Hemoglobin",
            ResultStatus::Low,
            "Low hemoglobin indicates anemia - check MCV to determine type.",
        )
        .interpretation(
            "Hematocrit",
            ResultStatus::High,
            "Elevated hematocrit may indicate dehydration or polycythemia.",
        )
        .interpretation(
            "Hematocrit",
            ResultStatus::Low,
            "Low hematocrit indicates anemia or blood loss.",
        )
        .interpretation(
            "MCV",
            ResultStatus::High,
            "High MCV (macrocytic anemia) - may indicate B12/folate deficiency or reticulocytosis.",
        )
        .interpretation(
            "MCV",
            ResultStatus::Low,
            "Low MCV (microcytic anemia) - may indicate iron deficiency or thalassemia.",
        )
        .interpretation(
            "Platelets",
            ResultStatus::High,
            "Elevated platelets may indicate inflammation, malignancy, or essential thrombocythemia.",
        )
        .interpretation(
            "Platelets",
            ResultStatus::Low,
            "Low platelets (thrombocytopenia) increases bleeding risk and requires investigation.",
        )
        .build()
        .expect("built-in CBC tables are valid")
}

/// Basic Metabolic Panel (BMP) - measures electrolytes, kidney and liver
/// function.
pub fn basic_metabolic_panel() -> TestCatalog {
    TestCatalog::builder("Basic Metabolic Panel (BMP)")
        .test(
            "Sodium",
            ReferenceRange::new(136.0, 145.0, "mEq/L")
                .with_critical_low(120.0)
                .with_critical_high(160.0),
        )
        .test(
            "Potassium",
            ReferenceRange::new(3.5, 5.0, "mEq/L")
                .with_critical_low(2.8)
                .with_critical_high(6.0),
        )
        .test("Chloride", ReferenceRange::new(98.0, 107.0, "mEq/L"))
        .test("CO2", ReferenceRange::new(23.0, 29.0, "mEq/L"))
        .test(
            "BUN",
            ReferenceRange::new(7.0, 20.0, "mg/dL").with_critical_high(100.0),
        )
        .test(
            "Creatinine",
            ReferenceRange::new(0.7, 1.3, "mg/dL").with_critical_high(4.0),
        )
        .test(
            "Glucose",
            ReferenceRange::new(70.0, 100.0, "mg/dL")
                .with_critical_low(40.0)
                .with_critical_high(400.0),
        )
        .test(
            "Calcium",
            ReferenceRange::new(8.5, 10.2, "mg/dL")
                .with_critical_low(6.5)
                .with_critical_high(13.0),
        )
        .interpretation(
            "Sodium",
            ResultStatus::High,
            "Hypernatremia - may indicate dehydration or diabetes insipidus.",
        )
        .interpretation(
            "Sodium",
            ResultStatus::Low,
            "Hyponatremia - may indicate SIADH, heart/kidney/liver disease, or excess water intake.",
        )
        .interpretation(
            "Potassium",
            ResultStatus::High,
            "Hyperkalemia - dangerous for heart; may indicate kidney failure or excessive supplementation.",
        )
        .interpretation(
            "Potassium",
            ResultStatus::Low,
            "Hypokalemia - may cause muscle weakness; check diuretic use and diarrhea.",
        )
        .interpretation(
            "Glucose",
            ResultStatus::High,
            "Hyperglycemia - may indicate diabetes, stress, or prednisone use.",
        )
        .interpretation(
            "Glucose",
            ResultStatus::Low,
            "Hypoglycemia - requires immediate evaluation; risk of seizure/coma.",
        )
        .interpretation(
            "BUN",
            ResultStatus::High,
            "Elevated BUN may indicate kidney disease, dehydration, or high protein diet.",
        )
        .interpretation(
            "BUN",
            ResultStatus::Low,
            "Low BUN may indicate liver disease, malnutrition, or overhydration.",
        )
        .interpretation(
            "Creatinine",
            ResultStatus::High,
            "Elevated creatinine indicates reduced kidney function - calculate GFR.",
        )
        .interpretation(
            "Creatinine",
            ResultStatus::Low,
            "Low creatinine may indicate low muscle mass or liver disease.",
        )
        .build()
        .expect("built-in BMP tables are valid")
}

/// Lipid Panel - measures cholesterol and triglycerides for cardiovascular
/// risk.
pub fn lipid_panel() -> TestCatalog {
    TestCatalog::builder("Lipid Panel")
        .test("Total_Cholesterol", ReferenceRange::new(0.0, 200.0, "mg/dL"))
        .test("LDL", ReferenceRange::new(0.0, 100.0, "mg/dL"))
        .test("HDL", ReferenceRange::new(40.0, 300.0, "mg/dL"))
        .test("Triglycerides", ReferenceRange::new(0.0, 150.0, "mg/dL"))
        .interpretation(
            "Total_Cholesterol",
            ResultStatus::High,
            "High total cholesterol increases cardiovascular disease risk.",
        )
        .interpretation(
            "Total_Cholesterol",
            ResultStatus::Normal,
            "Optimal cholesterol level for cardiovascular health.",
        )
        .interpretation(
            "LDL",
            ResultStatus::High,
            "High LDL ('bad' cholesterol) increases heart attack and stroke risk.",
        )
        .interpretation(
            "LDL",
            ResultStatus::Normal,
            "LDL at optimal level reduces cardiovascular disease risk.",
        )
        .interpretation(
            "HDL",
            ResultStatus::Low,
            "Low HDL ('good' cholesterol) increases cardiovascular disease risk.",
        )
        .interpretation(
            "HDL",
            ResultStatus::High,
            "High HDL protects against cardiovascular disease.",
        )
        .interpretation(
            "Triglycerides",
            ResultStatus::High,
            "High triglycerides increase cardiovascular disease risk and pancreatitis risk.",
        )
        .interpretation(
            "Triglycerides",
            ResultStatus::Normal,
            "Normal triglyceride level reduces cardiovascular risk.",
        )
        .build()
        .expect("built-in lipid panel tables are valid")
}
