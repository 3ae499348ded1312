//! Weighted diabetes risk scoring
//!
//! Global invariants enforced:
//! - Deterministic scoring: identical input yields identical score and factors
//! - Contributions are additive and evaluated in a fixed order
//! - The accumulated score is clamped to [0, 1]

use crate::metrics::HealthMetrics;
use serde::{Deserialize, Serialize};

/// Additive contribution weights for the scoring table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskWeights {
    pub glucose_high: f64,
    pub glucose_elevated: f64,
    pub bmi_obese: f64,
    pub bmi_overweight: f64,
    pub age_senior: f64,
    pub age_middle: f64,
    pub blood_pressure: f64,
    pub pedigree: f64,
    pub insulin: f64,
    /// Applied once per pregnancy
    pub pregnancy: f64,
}

impl Default for RiskWeights {
    fn default() -> Self {
        RiskWeights {
            glucose_high: 0.30,
            glucose_elevated: 0.15,
            bmi_obese: 0.25,
            bmi_overweight: 0.10,
            age_senior: 0.20,
            age_middle: 0.10,
            blood_pressure: 0.15,
            pedigree: 0.10,
            insulin: 0.10,
            pregnancy: 0.02,
        }
    }
}

/// Category thresholds over the clamped score
///
/// Independent of the contribution weights: a single weighted contribution
/// may cross a category boundary on its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskThresholds {
    pub moderate: f64,
    pub high: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        RiskThresholds {
            moderate: 0.30,
            high: 0.60,
        }
    }
}

/// Risk category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskCategory {
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Moderate Risk")]
    Moderate,
    #[serde(rename = "High Risk")]
    High,
}

impl RiskCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Low => "Low Risk",
            RiskCategory::Moderate => "Moderate Risk",
            RiskCategory::High => "High Risk",
        }
    }
}

/// Factor note used when nothing in the scoring table triggered
pub const ALL_CLEAR_FACTOR: &str = "All major risk factors are within normal ranges";

/// Score risk with default weights
pub fn score_risk(metrics: &HealthMetrics) -> (f64, Vec<String>) {
    score_risk_with_weights(metrics, &RiskWeights::default())
}

/// Evaluate the contribution table in its fixed order
///
/// Returns the clamped score and one factor note per triggered row. The
/// pregnancy contribution applies for any nonzero count; its note is only
/// emitted above four pregnancies.
pub fn score_risk_with_weights(
    metrics: &HealthMetrics,
    weights: &RiskWeights,
) -> (f64, Vec<String>) {
    let mut score = 0.0;
    let mut factors = Vec::new();

    if metrics.glucose > 140.0 {
        score += weights.glucose_high;
        factors.push(format!(
            "Elevated glucose level ({} mg/dL) - Normal: <100 mg/dL",
            metrics.glucose
        ));
    } else if metrics.glucose > 100.0 {
        score += weights.glucose_elevated;
        factors.push(format!(
            "Pre-diabetic glucose level ({} mg/dL)",
            metrics.glucose
        ));
    }

    if metrics.bmi > 30.0 {
        score += weights.bmi_obese;
        factors.push(format!(
            "Obesity (BMI: {}) - Increases insulin resistance",
            metrics.bmi
        ));
    } else if metrics.bmi > 25.0 {
        score += weights.bmi_overweight;
        factors.push(format!(
            "Overweight (BMI: {}) - Moderate risk factor",
            metrics.bmi
        ));
    }

    if metrics.age > 65 {
        score += weights.age_senior;
        factors.push(format!(
            "Advanced age ({} years) - Higher risk after 65",
            metrics.age
        ));
    } else if metrics.age > 45 {
        score += weights.age_middle;
        factors.push(format!(
            "Age {} years - Risk increases after 45",
            metrics.age
        ));
    }

    if metrics.blood_pressure > 140.0 {
        score += weights.blood_pressure;
        factors.push(format!(
            "High blood pressure ({} mmHg) - Often linked with diabetes",
            metrics.blood_pressure
        ));
    }

    if metrics.pedigree > 0.5 {
        score += weights.pedigree;
        factors.push("Strong family history of diabetes - Genetic predisposition".to_string());
    }

    if metrics.insulin > 200.0 {
        score += weights.insulin;
        factors.push(format!(
            "High insulin levels ({} μU/mL) - May indicate insulin resistance",
            metrics.insulin
        ));
    }

    if metrics.pregnancies > 0 {
        score += f64::from(metrics.pregnancies) * weights.pregnancy;
        if metrics.pregnancies > 4 {
            factors.push(format!(
                "Multiple pregnancies ({}) - Increased risk with each pregnancy",
                metrics.pregnancies
            ));
        }
    }

    (score.clamp(0.0, 1.0), factors)
}

/// Assign a category based on the score with default thresholds
pub fn categorize(score: f64) -> RiskCategory {
    categorize_with_thresholds(score, &RiskThresholds::default())
}

/// Assign a category with custom thresholds
pub fn categorize_with_thresholds(score: f64, thresholds: &RiskThresholds) -> RiskCategory {
    if score < thresholds.moderate {
        RiskCategory::Low
    } else if score < thresholds.high {
        RiskCategory::Moderate
    } else {
        RiskCategory::High
    }
}
