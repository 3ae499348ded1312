//! Assessment record and output rendering
//!
//! Global invariants enforced:
//! - Rendering displays record fields verbatim
//! - Deterministic fields render identically across runs

use crate::risk::RiskCategory;
use serde::{Deserialize, Serialize};

/// Complete risk assessment returned to the presentation layer
///
/// Created fresh per invocation; value equality only. `risk`, `category`,
/// and `factors` are deterministic in the input; `confidence` is not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Aggregated weighted risk in [0, 1]
    pub risk: f64,
    pub category: RiskCategory,
    /// Cosmetic value in [0.85, 0.98), unrelated to the input
    pub confidence: f64,
    /// One note per triggered scoring condition, in evaluation order
    pub factors: Vec<String>,
    /// At most four entries
    pub recommendations: Vec<String>,
}

/// Render an assessment as text output
pub fn render_text(assessment: &RiskAssessment) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<12} {:.0}%\n",
        "Risk:",
        assessment.risk * 100.0
    ));
    output.push_str(&format!("{:<12} {}\n", "Category:", assessment.category.as_str()));
    output.push_str(&format!(
        "{:<12} {:.0}%\n",
        "Confidence:",
        assessment.confidence * 100.0
    ));

    output.push_str("\nRisk factors:\n");
    for factor in &assessment.factors {
        output.push_str(&format!("  - {}\n", factor));
    }

    output.push_str("\nRecommendations:\n");
    for recommendation in &assessment.recommendations {
        output.push_str(&format!("  - {}\n", recommendation));
    }

    output
}

/// Render an assessment as JSON output
pub fn render_json(assessment: &RiskAssessment) -> String {
    serde_json::to_string_pretty(assessment).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RiskAssessment {
        RiskAssessment {
            risk: 0.45,
            category: RiskCategory::Moderate,
            confidence: 0.91,
            factors: vec!["Overweight (BMI: 27) - Moderate risk factor".to_string()],
            recommendations: vec![
                "Maintain a healthy weight through balanced diet and regular exercise".to_string(),
            ],
        }
    }

    #[test]
    fn test_render_text_shows_fields_verbatim() {
        let text = render_text(&sample());
        assert!(text.contains("45%"));
        assert!(text.contains("Moderate Risk"));
        assert!(text.contains("91%"));
        assert!(text.contains("  - Overweight (BMI: 27) - Moderate risk factor"));
        assert!(text.contains("  - Maintain a healthy weight"));
    }

    #[test]
    fn test_render_json_uses_display_category_names() {
        let json = render_json(&sample());
        assert!(json.contains("\"Moderate Risk\""));
        assert!(json.contains("\"risk\": 0.45"));
    }

    #[test]
    fn test_render_text_is_deterministic() {
        assert_eq!(render_text(&sample()), render_text(&sample()));
    }
}
