//! Pima core library - diabetes risk assessment from basic health metrics
//!
//! Weighted rule-based scoring over eight health metrics, producing a risk
//! score in [0, 1], a coarse category, factor explanations, and canned
//! recommendations, behind a simulated remote-call boundary.

#![deny(warnings)]

// Global invariants enforced in this crate:
// - Scoring is strictly per-assessment; no shared mutable state
// - Risk, category, and factors are deterministic in the input
// - Confidence is cosmetic randomness, bounded to [0.85, 0.98)
// - Assessment cannot fail on well-typed input

pub mod assessment;
pub mod confidence;
pub mod config;
pub mod metrics;
pub mod recommend;
pub mod risk;
pub mod scorer;

pub use assessment::{render_json, render_text, RiskAssessment};
pub use config::ResolvedConfig;
pub use metrics::HealthMetrics;
pub use risk::{RiskCategory, RiskThresholds, RiskWeights};
pub use scorer::{Delay, FixedDelay, NoDelay, RiskScorer};

/// Assess metrics with the default scorer (2 s simulated latency)
pub async fn assess(metrics: &HealthMetrics) -> RiskAssessment {
    RiskScorer::new().assess(metrics).await
}
