//! Health metrics input record and per-field input limits
//!
//! Global invariants enforced:
//! - Fields are clamped independently; there are no cross-field checks
//! - Clamping is idempotent

use serde::{Deserialize, Serialize};

/// One set of health metrics submitted for assessment
///
/// The eight fields of the Pima screening record. The presentation layer is
/// expected to clamp each field to its published limits before submission;
/// `clamped` performs that clamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    /// Number of pregnancies
    pub pregnancies: u32,
    /// Plasma glucose concentration (mg/dL)
    pub glucose: f64,
    /// Diastolic blood pressure (mmHg)
    pub blood_pressure: f64,
    /// Triceps skin fold thickness (mm)
    pub skin_thickness: f64,
    /// Serum insulin (μU/mL)
    pub insulin: f64,
    /// Body mass index (kg/m²)
    pub bmi: f64,
    /// Diabetes pedigree function score
    pub pedigree: f64,
    /// Age (years)
    pub age: u32,
}

/// Accepted input range and form step for one metric field
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldLimits {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl FieldLimits {
    const fn new(name: &'static str, min: f64, max: f64, step: f64) -> Self {
        FieldLimits {
            name,
            min,
            max,
            step,
        }
    }

    /// Clamp a value into this field's range
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}

pub const PREGNANCIES_LIMITS: FieldLimits = FieldLimits::new("pregnancies", 0.0, 20.0, 1.0);
pub const GLUCOSE_LIMITS: FieldLimits = FieldLimits::new("glucose", 0.0, 300.0, 1.0);
pub const BLOOD_PRESSURE_LIMITS: FieldLimits = FieldLimits::new("blood_pressure", 0.0, 200.0, 1.0);
pub const SKIN_THICKNESS_LIMITS: FieldLimits = FieldLimits::new("skin_thickness", 0.0, 100.0, 1.0);
pub const INSULIN_LIMITS: FieldLimits = FieldLimits::new("insulin", 0.0, 900.0, 1.0);
pub const BMI_LIMITS: FieldLimits = FieldLimits::new("bmi", 0.0, 70.0, 0.1);
pub const PEDIGREE_LIMITS: FieldLimits = FieldLimits::new("pedigree", 0.0, 3.0, 0.01);
pub const AGE_LIMITS: FieldLimits = FieldLimits::new("age", 0.0, 120.0, 1.0);

/// Published input constraints, one entry per metric field
pub const FIELD_LIMITS: [FieldLimits; 8] = [
    PREGNANCIES_LIMITS,
    GLUCOSE_LIMITS,
    BLOOD_PRESSURE_LIMITS,
    SKIN_THICKNESS_LIMITS,
    INSULIN_LIMITS,
    BMI_LIMITS,
    PEDIGREE_LIMITS,
    AGE_LIMITS,
];

impl HealthMetrics {
    /// Clamp every field to its published limits
    pub fn clamped(self) -> Self {
        HealthMetrics {
            pregnancies: self.pregnancies.min(PREGNANCIES_LIMITS.max as u32),
            glucose: GLUCOSE_LIMITS.clamp(self.glucose),
            blood_pressure: BLOOD_PRESSURE_LIMITS.clamp(self.blood_pressure),
            skin_thickness: SKIN_THICKNESS_LIMITS.clamp(self.skin_thickness),
            insulin: INSULIN_LIMITS.clamp(self.insulin),
            bmi: BMI_LIMITS.clamp(self.bmi),
            pedigree: PEDIGREE_LIMITS.clamp(self.pedigree),
            age: self.age.min(AGE_LIMITS.max as u32),
        }
    }
}

/// Render the input constraint table as JSON
pub fn render_limits_json() -> String {
    serde_json::to_string_pretty(&FIELD_LIMITS).unwrap_or_else(|_| "[]".to_string())
}
