use serde::{Deserialize, Serialize};

// ── Analysis result types ──

/// Structured risk assessment produced by the model for a single transcript.
/// Field names follow the provider wire format (camelCase JSON). Constructed
/// fresh per request and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub risk_assessment: RiskAssessment,
    /// Abuse categories detected in the conversation. Open taxonomy, may be
    /// empty when nothing problematic was found.
    pub detected_categories: Vec<String>,
    /// Verbatim quotes from the input transcript supporting the detected
    /// categories.
    pub relevant_examples: Vec<String>,
    /// Free-text guidance, newline-delimited. Callers split on newline for
    /// display; no further structure is guaranteed.
    pub recommendations: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Overall severity on the fixed 1-10 scale.
    pub risk_score: u8,
    /// Coherent synthesis of the identified risks, not a category list.
    pub risk_summary: String,
}

// ── Risk bands ──

/// Presentation bands for the 1-10 scale. The boundaries (1-3, 4-6, 7-8,
/// 9-10) are part of the scoring contract embedded in the prompt rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskBand {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskBand {
    /// Band for a validated score. Returns None outside the 1-10 scale.
    pub fn from_score(score: u8) -> Option<Self> {
        match score {
            1..=3 => Some(Self::Low),
            4..=6 => Some(Self::Medium),
            7..=8 => Some(Self::High),
            9..=10 => Some(Self::VeryHigh),
            _ => None,
        }
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Bajo"),
            Self::Medium => write!(f, "Medio"),
            Self::High => write!(f, "Alto"),
            Self::VeryHigh => write!(f, "Muy Alto"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(RiskBand::from_score(1), Some(RiskBand::Low));
        assert_eq!(RiskBand::from_score(3), Some(RiskBand::Low));
        assert_eq!(RiskBand::from_score(4), Some(RiskBand::Medium));
        assert_eq!(RiskBand::from_score(6), Some(RiskBand::Medium));
        assert_eq!(RiskBand::from_score(7), Some(RiskBand::High));
        assert_eq!(RiskBand::from_score(8), Some(RiskBand::High));
        assert_eq!(RiskBand::from_score(9), Some(RiskBand::VeryHigh));
        assert_eq!(RiskBand::from_score(10), Some(RiskBand::VeryHigh));
    }

    #[test]
    fn test_band_out_of_scale() {
        assert_eq!(RiskBand::from_score(0), None);
        assert_eq!(RiskBand::from_score(11), None);
        assert_eq!(RiskBand::from_score(255), None);
    }

    #[test]
    fn test_band_labels_are_spanish() {
        assert_eq!(RiskBand::Low.to_string(), "Bajo");
        assert_eq!(RiskBand::VeryHigh.to_string(), "Muy Alto");
    }

    #[test]
    fn test_result_deserializes_camel_case() {
        let json = r#"{
            "riskAssessment": {"riskScore": 5, "riskSummary": "Riesgo medio."},
            "detectedCategories": ["control y celos"],
            "relevantExamples": ["¿con quién estabas?"],
            "recommendations": "Establece límites.\nBusca apoyo."
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.risk_assessment.risk_score, 5);
        assert_eq!(result.detected_categories.len(), 1);
        assert_eq!(result.recommendations.lines().count(), 2);
    }

    #[test]
    fn test_result_serializes_back_to_camel_case() {
        let result = AnalysisResult {
            risk_assessment: RiskAssessment {
                risk_score: 2,
                risk_summary: "Indicios leves.".to_string(),
            },
            detected_categories: vec![],
            relevant_examples: vec![],
            recommendations: "Sin acciones urgentes.".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["riskAssessment"]["riskScore"], 2);
        assert!(json["detectedCategories"].as_array().unwrap().is_empty());
    }
}
