//! Recommendation assembly
//!
//! Conditional advice is evaluated in a fixed order, followed by the fixed
//! default entries, then a consult entry when more than two scoring factors
//! triggered. The assembled list is truncated to `MAX_RECOMMENDATIONS`.

use crate::metrics::HealthMetrics;

/// Maximum entries returned after truncation
pub const MAX_RECOMMENDATIONS: usize = 4;

/// Advice appended when the triggered factor count exceeds two
pub const CONSULT_ADVICE: &str =
    "Consult with a healthcare provider for personalized diabetes prevention plan";

const DEFAULT_ADVICE: [&str; 3] = [
    "Follow a balanced diet rich in vegetables, lean proteins, and whole grains",
    "Engage in at least 150 minutes of moderate-intensity exercise per week",
    "Maintain regular sleep schedule and manage stress levels",
];

/// Assemble recommendations for the given metrics
///
/// `factor_count` is the number of triggered scoring factors, not the number
/// of conditional entries here; the two tables use independent thresholds.
/// Truncation keeps the first `MAX_RECOMMENDATIONS` entries, so the consult
/// advice is silently dropped whenever the conditionals fill the list first.
/// Callers must not rely on seeing it for multi-factor inputs.
pub fn recommend(metrics: &HealthMetrics, factor_count: usize) -> Vec<String> {
    let mut recommendations = Vec::new();

    if metrics.glucose > 100.0 {
        recommendations.push(
            "Monitor blood glucose levels regularly and consider dietary changes to reduce sugar intake"
                .to_string(),
        );
    }

    if metrics.bmi > 25.0 {
        recommendations
            .push("Maintain a healthy weight through balanced diet and regular exercise".to_string());
    }

    if metrics.blood_pressure > 120.0 {
        recommendations.push("Monitor blood pressure and limit sodium intake".to_string());
    }

    if metrics.age > 45 {
        recommendations.push("Schedule regular health checkups and diabetes screening".to_string());
    }

    for advice in DEFAULT_ADVICE {
        recommendations.push(advice.to_string());
    }

    if factor_count > 2 {
        recommendations.push(CONSULT_ADVICE.to_string());
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> HealthMetrics {
        HealthMetrics {
            pregnancies: 0,
            glucose: 90.0,
            blood_pressure: 70.0,
            skin_thickness: 20.0,
            insulin: 50.0,
            bmi: 22.0,
            pedigree: 0.2,
            age: 25,
        }
    }

    #[test]
    fn test_no_conditions_yields_the_three_defaults() {
        let recommendations = recommend(&baseline(), 0);
        assert_eq!(recommendations.len(), 3);
        for (recommendation, advice) in recommendations.iter().zip(DEFAULT_ADVICE) {
            assert_eq!(recommendation, advice);
        }
    }

    #[test]
    fn test_conditionals_come_first_and_fill_the_list() {
        let recommendations = recommend(
            &HealthMetrics {
                glucose: 150.0,
                bmi: 32.0,
                blood_pressure: 130.0,
                age: 50,
                ..baseline()
            },
            4,
        );
        assert_eq!(recommendations.len(), MAX_RECOMMENDATIONS);
        assert!(recommendations[0].starts_with("Monitor blood glucose"));
        assert!(recommendations[1].starts_with("Maintain a healthy weight"));
        assert!(recommendations[2].starts_with("Monitor blood pressure"));
        assert!(recommendations[3].starts_with("Schedule regular health checkups"));
    }

    #[test]
    fn test_consult_advice_dropped_by_truncation_when_conditionals_fill() {
        // More than two factors, but four conditionals already occupy the
        // truncated list. The consult entry is lost.
        let recommendations = recommend(
            &HealthMetrics {
                glucose: 150.0,
                bmi: 32.0,
                blood_pressure: 130.0,
                age: 50,
                ..baseline()
            },
            5,
        );
        assert_eq!(recommendations.len(), MAX_RECOMMENDATIONS);
        assert!(!recommendations.contains(&CONSULT_ADVICE.to_string()));
    }

    #[test]
    fn test_consult_advice_survives_without_conditional_entries() {
        // Factors from pedigree/insulin/pregnancies trigger no conditional
        // advice, leaving room for the consult entry after the defaults.
        let recommendations = recommend(&baseline(), 3);
        assert_eq!(recommendations.len(), MAX_RECOMMENDATIONS);
        assert_eq!(recommendations[3], CONSULT_ADVICE);
    }

    #[test]
    fn test_never_more_than_four_entries() {
        let recommendations = recommend(
            &HealthMetrics {
                glucose: 300.0,
                bmi: 70.0,
                blood_pressure: 200.0,
                age: 120,
                ..baseline()
            },
            7,
        );
        assert_eq!(recommendations.len(), MAX_RECOMMENDATIONS);
    }
}
