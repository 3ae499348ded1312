//! Asynchronous scorer boundary
//!
//! The assessment itself is a pure function of the input metrics. The scorer
//! wraps it behind an awaitable delay standing in for a remote model call.
//! The call cannot fail and carries no cancellation, timeout, or retry
//! semantics; concurrent assessments are independent.

use crate::assessment::RiskAssessment;
use crate::confidence::sample_confidence;
use crate::config::DEFAULT_DELAY_MS;
use crate::metrics::HealthMetrics;
use crate::recommend::recommend;
use crate::risk::{self, RiskThresholds, RiskWeights};
use std::future::Future;
use std::time::Duration;

/// Awaitable latency capability
///
/// Production scorers use `FixedDelay`; tests use `NoDelay`. A real backend
/// call would implement this seam in place of the sleep.
pub trait Delay {
    fn wait(&self) -> impl Future<Output = ()> + Send;
}

/// Fixed sleep standing in for network latency
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    duration: Duration,
}

impl FixedDelay {
    pub fn new(duration: Duration) -> Self {
        FixedDelay { duration }
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        FixedDelay::new(Duration::from_millis(DEFAULT_DELAY_MS))
    }
}

impl Delay for FixedDelay {
    fn wait(&self) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(self.duration)
    }
}

/// Immediate completion, for tests and embedding without a simulated backend
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn wait(&self) -> impl Future<Output = ()> + Send {
        std::future::ready(())
    }
}

/// Risk scorer: weighted rule evaluation behind a simulated remote call
#[derive(Debug, Clone)]
pub struct RiskScorer<D = FixedDelay> {
    delay: D,
    weights: RiskWeights,
    thresholds: RiskThresholds,
}

impl RiskScorer<FixedDelay> {
    /// Scorer with default weights, thresholds, and latency
    pub fn new() -> Self {
        RiskScorer::with_delay(FixedDelay::default())
    }
}

impl Default for RiskScorer<FixedDelay> {
    fn default() -> Self {
        RiskScorer::new()
    }
}

impl<D: Delay> RiskScorer<D> {
    /// Scorer with default weights and thresholds behind the given delay
    pub fn with_delay(delay: D) -> Self {
        RiskScorer {
            delay,
            weights: RiskWeights::default(),
            thresholds: RiskThresholds::default(),
        }
    }

    /// Scorer with custom weights and thresholds behind the given delay
    pub fn with_config(delay: D, weights: RiskWeights, thresholds: RiskThresholds) -> Self {
        RiskScorer {
            delay,
            weights,
            thresholds,
        }
    }

    /// Assess the given metrics
    ///
    /// Resolves after the configured delay and never fails. `risk`,
    /// `category`, and `factors` are deterministic in the input;
    /// `confidence` is not.
    pub async fn assess(&self, metrics: &HealthMetrics) -> RiskAssessment {
        self.delay.wait().await;

        let (score, mut factors) = risk::score_risk_with_weights(metrics, &self.weights);
        let category = risk::categorize_with_thresholds(score, &self.thresholds);

        // The consult advice keys off the triggered count, before the
        // placeholder note is added for an empty factor list.
        let recommendations = recommend(metrics, factors.len());
        if factors.is_empty() {
            factors.push(risk::ALL_CLEAR_FACTOR.to_string());
        }

        RiskAssessment {
            risk: score,
            category,
            confidence: sample_confidence(&mut rand::thread_rng()),
            factors,
            recommendations,
        }
    }
}
