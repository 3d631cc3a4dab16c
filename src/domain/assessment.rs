//! Assessment result types.
//!
//! Represents the output of one classifier run over an encoded patient row.

use serde::{Deserialize, Serialize};

/// Which classifier/scaler pair (and recommendation set) applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentMode {
    /// Early warning screening
    EarlyWarning,
    /// Comprehensive heart disease risk assessment
    Comprehensive,
}

impl AssessmentMode {
    /// Assessment-type name as printed in reports.
    #[must_use]
    pub fn report_label(&self) -> &'static str {
        match self {
            Self::EarlyWarning => "Early Warning",
            Self::Comprehensive => "Comprehensive Heart Disease",
        }
    }
}

impl std::fmt::Display for AssessmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EarlyWarning => write!(f, "Early Warning"),
            Self::Comprehensive => write!(f, "Heart Disease"),
        }
    }
}

/// Risk level classification for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Low risk of heart disease
    Low,
    /// Moderate risk, monitoring recommended
    Moderate,
    /// High risk, intervention recommended
    High,
}

impl RiskLevel {
    /// Classify a positive-class probability into the gauge's severity bands.
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        if probability < 0.3 {
            Self::Low
        } else if probability < 0.7 {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low risk - No significant indicators",
            Self::Moderate => "Moderate risk - Follow-up recommended",
            Self::High => "High risk - Immediate consultation advised",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Moderate => write!(f, "MODERATE"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Outcome of one assessment: mode, binary label, positive-class probability
/// and the derived recommendation bullets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResult {
    /// Which model/scaler pair produced this result
    pub mode: AssessmentMode,

    /// Binary prediction (0 = not at risk, 1 = at risk)
    pub prediction: u8,

    /// Positive-class probability (0.0 to 1.0)
    pub probability: f64,

    /// Clinical recommendation bullets, in display order
    pub recommendations: Vec<String>,
}

impl AssessmentResult {
    /// Severity band for the gauge and history views.
    #[must_use]
    pub fn risk_level(&self) -> RiskLevel {
        RiskLevel::from_probability(self.probability)
    }

    /// Risk label as printed in reports.
    #[must_use]
    pub fn risk_label(&self) -> &'static str {
        if self.prediction == 1 {
            "High Risk"
        } else {
            "Low Risk"
        }
    }

    /// Probability as a percent string, one decimal place.
    #[must_use]
    pub fn probability_percent(&self) -> String {
        format!("{:.1}%", self.probability * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(mode: AssessmentMode, prediction: u8, probability: f64) -> AssessmentResult {
        AssessmentResult {
            mode,
            prediction,
            probability,
            recommendations: vec!["Annual cardiac check-up".to_string()],
        }
    }

    #[test]
    fn test_risk_level_bands() {
        assert_eq!(RiskLevel::from_probability(0.1), RiskLevel::Low);
        assert_eq!(RiskLevel::from_probability(0.3), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_probability(0.5), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_probability(0.7), RiskLevel::High);
        assert_eq!(RiskLevel::from_probability(0.9), RiskLevel::High);
    }

    #[test]
    fn test_risk_label_follows_prediction() {
        assert_eq!(
            result(AssessmentMode::EarlyWarning, 1, 0.82).risk_label(),
            "High Risk"
        );
        assert_eq!(
            result(AssessmentMode::Comprehensive, 0, 0.12).risk_label(),
            "Low Risk"
        );
    }

    #[test]
    fn test_probability_percent_formatting() {
        assert_eq!(
            result(AssessmentMode::EarlyWarning, 0, 0.123).probability_percent(),
            "12.3%"
        );
        assert_eq!(
            result(AssessmentMode::EarlyWarning, 1, 1.0).probability_percent(),
            "100.0%"
        );
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(AssessmentMode::EarlyWarning.report_label(), "Early Warning");
        assert_eq!(
            AssessmentMode::Comprehensive.report_label(),
            "Comprehensive Heart Disease"
        );
        assert_eq!(AssessmentMode::Comprehensive.to_string(), "Heart Disease");
    }
}
