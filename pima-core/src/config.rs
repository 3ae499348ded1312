//! Configuration file support for Pima
//!
//! Loads scoring overrides from JSON files.
//!
//! Search order:
//! 1. Explicit path (--config CLI flag)
//! 2. `.pimarc.json` in the working directory
//! 3. `pima.config.json` in the working directory
//!
//! All fields are optional. CLI flags take precedence over config file values.

use crate::risk::{RiskThresholds, RiskWeights};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Simulated backend latency applied when nothing overrides it
pub const DEFAULT_DELAY_MS: u64 = 2000;

/// Upper bound accepted for a configured latency
const MAX_DELAY_MS: u64 = 60_000;

/// Pima configuration loaded from a JSON config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PimaConfig {
    /// Custom contribution weights for the scoring table
    #[serde(default)]
    pub weights: Option<WeightConfig>,

    /// Custom category thresholds
    #[serde(default)]
    pub thresholds: Option<ThresholdConfig>,

    /// Simulated backend latency in milliseconds (default: 2000)
    #[serde(default)]
    pub delay_ms: Option<u64>,
}

/// Custom category thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdConfig {
    /// Score threshold for moderate risk (default: 0.3)
    pub moderate: Option<f64>,
    /// Score threshold for high risk (default: 0.6)
    pub high: Option<f64>,
}

/// Custom contribution weights for the scoring table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightConfig {
    /// Weight for glucose above 140 mg/dL (default: 0.3)
    pub glucose_high: Option<f64>,
    /// Weight for glucose above 100 mg/dL (default: 0.15)
    pub glucose_elevated: Option<f64>,
    /// Weight for BMI above 30 (default: 0.25)
    pub bmi_obese: Option<f64>,
    /// Weight for BMI above 25 (default: 0.1)
    pub bmi_overweight: Option<f64>,
    /// Weight for age above 65 (default: 0.2)
    pub age_senior: Option<f64>,
    /// Weight for age above 45 (default: 0.1)
    pub age_middle: Option<f64>,
    /// Weight for blood pressure above 140 mmHg (default: 0.15)
    pub blood_pressure: Option<f64>,
    /// Weight for pedigree above 0.5 (default: 0.1)
    pub pedigree: Option<f64>,
    /// Weight for insulin above 200 μU/mL (default: 0.1)
    pub insulin: Option<f64>,
    /// Weight applied once per pregnancy (default: 0.02)
    pub pregnancy: Option<f64>,
}

/// Resolved configuration ready for use
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub weights: RiskWeights,
    pub thresholds: RiskThresholds,
    /// Simulated backend latency
    pub delay: Duration,
    /// Path the config was loaded from (None if defaults)
    pub config_path: Option<PathBuf>,
}

impl PimaConfig {
    /// Validate the configuration for logical errors
    pub fn validate(&self) -> Result<()> {
        let threshold_defaults = RiskThresholds::default();

        // Validate thresholds are positive, ordered, and within the score range
        if let Some(ref t) = self.thresholds {
            let moderate = t.moderate.unwrap_or(threshold_defaults.moderate);
            let high = t.high.unwrap_or(threshold_defaults.high);

            if moderate <= 0.0 {
                anyhow::bail!("thresholds.moderate must be positive (got {})", moderate);
            }
            if high > 1.0 {
                anyhow::bail!("thresholds.high must be at most 1.0 (got {})", high);
            }
            if moderate >= high {
                anyhow::bail!(
                    "thresholds.moderate ({}) must be less than thresholds.high ({})",
                    moderate,
                    high
                );
            }
        }

        // Validate weights stay within the score range
        if let Some(ref w) = self.weights {
            for (name, val) in [
                ("glucose_high", w.glucose_high),
                ("glucose_elevated", w.glucose_elevated),
                ("bmi_obese", w.bmi_obese),
                ("bmi_overweight", w.bmi_overweight),
                ("age_senior", w.age_senior),
                ("age_middle", w.age_middle),
                ("blood_pressure", w.blood_pressure),
                ("pedigree", w.pedigree),
                ("insulin", w.insulin),
                ("pregnancy", w.pregnancy),
            ] {
                if let Some(v) = val {
                    if v < 0.0 {
                        anyhow::bail!("weights.{} must be non-negative (got {})", name, v);
                    }
                    if v > 1.0 {
                        anyhow::bail!("weights.{} must be at most 1.0 (got {})", name, v);
                    }
                }
            }
        }

        // Validate the latency override is sane
        if let Some(ms) = self.delay_ms {
            if ms > MAX_DELAY_MS {
                anyhow::bail!("delay_ms must be at most {} (got {})", MAX_DELAY_MS, ms);
            }
        }

        Ok(())
    }

    /// Resolve config into concrete form ready for use
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.validate()?;

        let weight_defaults = RiskWeights::default();
        let weights = match &self.weights {
            Some(w) => RiskWeights {
                glucose_high: w.glucose_high.unwrap_or(weight_defaults.glucose_high),
                glucose_elevated: w.glucose_elevated.unwrap_or(weight_defaults.glucose_elevated),
                bmi_obese: w.bmi_obese.unwrap_or(weight_defaults.bmi_obese),
                bmi_overweight: w.bmi_overweight.unwrap_or(weight_defaults.bmi_overweight),
                age_senior: w.age_senior.unwrap_or(weight_defaults.age_senior),
                age_middle: w.age_middle.unwrap_or(weight_defaults.age_middle),
                blood_pressure: w.blood_pressure.unwrap_or(weight_defaults.blood_pressure),
                pedigree: w.pedigree.unwrap_or(weight_defaults.pedigree),
                insulin: w.insulin.unwrap_or(weight_defaults.insulin),
                pregnancy: w.pregnancy.unwrap_or(weight_defaults.pregnancy),
            },
            None => weight_defaults,
        };

        let threshold_defaults = RiskThresholds::default();
        let thresholds = match &self.thresholds {
            Some(t) => RiskThresholds {
                moderate: t.moderate.unwrap_or(threshold_defaults.moderate),
                high: t.high.unwrap_or(threshold_defaults.high),
            },
            None => threshold_defaults,
        };

        Ok(ResolvedConfig {
            weights,
            thresholds,
            delay: Duration::from_millis(self.delay_ms.unwrap_or(DEFAULT_DELAY_MS)),
            config_path: None,
        })
    }
}

impl ResolvedConfig {
    /// Build a ResolvedConfig with all defaults (no config file)
    pub fn defaults() -> Result<Self> {
        PimaConfig::default().resolve()
    }
}

/// Discover and load a config file from the working directory
///
/// Search order:
/// 1. `.pimarc.json`
/// 2. `pima.config.json`
///
/// Returns `None` if no config file is found (use defaults).
pub fn discover_config(dir: &Path) -> Result<Option<(PimaConfig, PathBuf)>> {
    let rc_path = dir.join(".pimarc.json");
    if rc_path.exists() {
        let config = load_config_file(&rc_path)?;
        return Ok(Some((config, rc_path)));
    }

    let config_path = dir.join("pima.config.json");
    if config_path.exists() {
        let config = load_config_file(&config_path)?;
        return Ok(Some((config, config_path)));
    }

    Ok(None)
}

/// Load config from an explicit file path
pub fn load_config_file(path: &Path) -> Result<PimaConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;

    let config: PimaConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;

    config
        .validate()
        .with_context(|| format!("invalid config in: {}", path.display()))?;

    Ok(config)
}

/// Load and resolve config for a run
///
/// If `config_path` is provided, loads from that file.
/// Otherwise, discovers config from the working directory.
/// Returns default config if nothing is found.
pub fn load_and_resolve(dir: &Path, config_path: Option<&Path>) -> Result<ResolvedConfig> {
    let (config, source_path) = if let Some(path) = config_path {
        let config = load_config_file(path)?;
        (config, Some(path.to_path_buf()))
    } else {
        match discover_config(dir)? {
            Some((config, path)) => (config, Some(path)),
            None => (PimaConfig::default(), None),
        }
    };

    let mut resolved = config.resolve()?;
    resolved.config_path = source_path;
    Ok(resolved)
}
