//! Integration tests for the assessment pipeline

use pima_core::confidence::CONFIDENCE_RANGE;
use pima_core::recommend::{CONSULT_ADVICE, MAX_RECOMMENDATIONS};
use pima_core::risk::ALL_CLEAR_FACTOR;
use pima_core::{HealthMetrics, NoDelay, RiskCategory, RiskScorer};

fn scorer() -> RiskScorer<NoDelay> {
    RiskScorer::with_delay(NoDelay)
}

fn normal_metrics() -> HealthMetrics {
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

fn high_risk_metrics() -> HealthMetrics {
    HealthMetrics {
        pregnancies: 6,
        glucose: 180.0,
        blood_pressure: 150.0,
        skin_thickness: 35.0,
        insulin: 250.0,
        bmi: 34.0,
        pedigree: 0.8,
        age: 70,
    }
}

#[tokio::test]
async fn test_all_normal_input() {
    let assessment = scorer().assess(&normal_metrics()).await;

    assert_eq!(assessment.risk, 0.0);
    assert_eq!(assessment.category, RiskCategory::Low);
    assert_eq!(assessment.factors, vec![ALL_CLEAR_FACTOR.to_string()]);
    // No conditional advice triggers, so only the three defaults remain.
    assert_eq!(assessment.recommendations.len(), 3);
    assert!(assessment.recommendations[0].starts_with("Follow a balanced diet"));
}

#[tokio::test]
async fn test_high_risk_input_clamps_and_truncates() {
    let assessment = scorer().assess(&high_risk_metrics()).await;

    // Raw weighted sum is 1.22; the clamp takes it to exactly 1.0.
    assert_eq!(assessment.risk, 1.0);
    assert_eq!(assessment.category, RiskCategory::High);
    assert_eq!(assessment.factors.len(), 7);
    assert!(assessment.factors[0].contains("glucose"));
    assert!(assessment.factors[6].contains("pregnancies"));

    // Four conditional advice entries fill the truncated list; the consult
    // entry is dropped even though more than two factors triggered.
    assert_eq!(assessment.recommendations.len(), MAX_RECOMMENDATIONS);
    assert!(assessment.recommendations[0].starts_with("Monitor blood glucose"));
    assert!(!assessment
        .recommendations
        .contains(&CONSULT_ADVICE.to_string()));
}

#[tokio::test]
async fn test_consult_advice_reachable_without_conditional_entries() {
    // Three factors (pedigree, insulin, pregnancies) but no conditional
    // advice thresholds crossed, so the consult entry survives truncation.
    let metrics = HealthMetrics {
        pregnancies: 6,
        insulin: 250.0,
        pedigree: 0.8,
        ..normal_metrics()
    };
    let assessment = scorer().assess(&metrics).await;

    assert_eq!(assessment.category, RiskCategory::Moderate);
    assert_eq!(assessment.factors.len(), 3);
    assert_eq!(assessment.recommendations.len(), MAX_RECOMMENDATIONS);
    assert_eq!(assessment.recommendations[3], CONSULT_ADVICE);
}

#[tokio::test]
async fn test_risk_stays_in_unit_interval() {
    let inputs = [
        normal_metrics(),
        high_risk_metrics(),
        HealthMetrics {
            pregnancies: 20,
            glucose: 300.0,
            blood_pressure: 200.0,
            skin_thickness: 100.0,
            insulin: 900.0,
            bmi: 70.0,
            pedigree: 3.0,
            age: 120,
        },
    ];

    for metrics in inputs {
        let assessment = scorer().assess(&metrics).await;
        assert!(
            (0.0..=1.0).contains(&assessment.risk),
            "risk {} out of range for {:?}",
            assessment.risk,
            metrics
        );
        assert!(!assessment.factors.is_empty(), "factors must never be empty");
        assert!(assessment.recommendations.len() <= MAX_RECOMMENDATIONS);
    }
}

#[tokio::test]
async fn test_single_factor_reaches_moderate_category() {
    // The glucose weight alone equals the moderate threshold; the category
    // thresholds do not need to align with the contribution weights.
    let metrics = HealthMetrics {
        glucose: 150.0,
        ..normal_metrics()
    };
    let assessment = scorer().assess(&metrics).await;
    assert_eq!(assessment.risk, 0.30);
    assert_eq!(assessment.category, RiskCategory::Moderate);
}

#[tokio::test]
async fn test_deterministic_parts_are_idempotent() {
    let metrics = high_risk_metrics();
    let first = scorer().assess(&metrics).await;
    let second = scorer().assess(&metrics).await;

    assert_eq!(first.risk, second.risk);
    assert_eq!(first.category, second.category);
    assert_eq!(first.factors, second.factors);
    assert_eq!(first.recommendations, second.recommendations);
}

#[tokio::test]
async fn test_confidence_is_bounded_nondeterminism() {
    let metrics = normal_metrics();
    for _ in 0..50 {
        let assessment = scorer().assess(&metrics).await;
        assert!(
            CONFIDENCE_RANGE.contains(&assessment.confidence),
            "confidence {} out of range",
            assessment.confidence
        );
    }
}

#[tokio::test]
async fn test_concurrent_assessments_are_independent() {
    let scorer = scorer();
    let normal_m = normal_metrics();
    let high_m = high_risk_metrics();
    let (normal, high) = tokio::join!(
        scorer.assess(&normal_m),
        scorer.assess(&high_m)
    );

    assert_eq!(normal.category, RiskCategory::Low);
    assert_eq!(high.category, RiskCategory::High);
}
