//! Recommendation text lookup.
//!
//! Pure branching on (mode, label, selected raw inputs). The strings are the
//! fixed clinical wording shown in the UI and printed into reports; no model
//! output is involved.

use super::{AlcoholIntake, AssessmentMode, PatientInput, PhysicalActivity, StressLevel};

/// Recommendation bullets for one assessment, in display order.
///
/// Every (mode, label) combination yields exactly five bullets; in
/// early-warning mode the last bullet also branches on smoking status.
#[must_use]
pub fn recommend(mode: AssessmentMode, prediction: u8, patient: &PatientInput) -> Vec<String> {
    let at_risk = prediction == 1;
    match mode {
        AssessmentMode::EarlyWarning => vec![
            if at_risk {
                "Consult a cardiologist within 2 weeks"
            } else {
                "Annual cardiac check-up"
            }
            .to_string(),
            if at_risk {
                "Schedule ECG and stress test"
            } else {
                "Continue healthy habits"
            }
            .to_string(),
            "Begin blood pressure monitoring".to_string(),
            "Consult nutritionist for diet plan".to_string(),
            if patient.smoking {
                "Smoking cessation program"
            } else {
                "Maintain non-smoking status"
            }
            .to_string(),
        ],
        AssessmentMode::Comprehensive => vec![
            if at_risk {
                "Cardiology consultation within 1 week"
            } else {
                "Annual physical exam"
            }
            .to_string(),
            if at_risk {
                "Complete lipid profile"
            } else {
                "Biannual lipid profile"
            }
            .to_string(),
            if at_risk {
                "Stress echocardiogram"
            } else {
                "Regular blood pressure checks"
            }
            .to_string(),
            if at_risk {
                "Possible statin therapy"
            } else {
                "Maintain healthy diet"
            }
            .to_string(),
            if at_risk {
                "Cardiac rehabilitation referral"
            } else {
                "150 mins exercise/week"
            }
            .to_string(),
        ],
    }
}

/// Personalized risk reduction plan shown alongside comprehensive results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskReductionPlan {
    /// Top improvement areas
    pub improvement: Vec<String>,

    /// Monitoring schedule
    pub monitoring: Vec<String>,
}

/// Derive the risk reduction plan from raw inputs. Threshold rules only.
#[must_use]
pub fn risk_reduction_plan(patient: &PatientInput) -> RiskReductionPlan {
    let low_activity = matches!(
        patient.physical_activity,
        PhysicalActivity::Sedentary | PhysicalActivity::Light
    );
    let heavy_alcohol = matches!(
        patient.alcohol_intake,
        AlcoholIntake::Moderate | AlcoholIntake::Heavy
    );

    RiskReductionPlan {
        improvement: vec![
            if patient.smoking {
                "Smoking cessation"
            } else {
                "Maintain non-smoking"
            }
            .to_string(),
            if patient.bmi > 25.0 {
                "Weight management"
            } else {
                "Maintain healthy weight"
            }
            .to_string(),
            if low_activity {
                "Increase physical activity"
            } else {
                "Maintain activity level"
            }
            .to_string(),
            if heavy_alcohol {
                "Reduce alcohol consumption"
            } else {
                "Maintain alcohol consumption"
            }
            .to_string(),
        ],
        monitoring: vec![
            if patient.resting_bp > 130 {
                "Weekly blood pressure monitoring"
            } else {
                "Monthly blood pressure checks"
            }
            .to_string(),
            if patient.cholesterol > 200 {
                "Monthly cholesterol tests"
            } else {
                "Quarterly cholesterol test"
            }
            .to_string(),
            if patient.diabetes {
                "Daily glucose monitoring"
            } else {
                "Annual diabetes screening"
            }
            .to_string(),
            if patient.stress_level == StressLevel::High {
                "Stress management counseling"
            } else {
                "Regular stress assessment"
            }
            .to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::patient::baseline_patient;

    #[test]
    fn test_all_mode_label_combinations_are_non_empty() {
        let patient = baseline_patient();
        for mode in [AssessmentMode::EarlyWarning, AssessmentMode::Comprehensive] {
            for prediction in [0, 1] {
                let bullets = recommend(mode, prediction, &patient);
                assert_eq!(bullets.len(), 5);
                assert!(bullets.iter().all(|b| !b.is_empty()));
            }
        }
    }

    #[test]
    fn test_early_warning_text() {
        let patient = baseline_patient();

        let positive = recommend(AssessmentMode::EarlyWarning, 1, &patient);
        assert_eq!(positive[0], "Consult a cardiologist within 2 weeks");
        assert_eq!(positive[1], "Schedule ECG and stress test");
        assert_eq!(positive[4], "Maintain non-smoking status");

        let negative = recommend(AssessmentMode::EarlyWarning, 0, &patient);
        assert_eq!(negative[0], "Annual cardiac check-up");
        assert_eq!(negative[1], "Continue healthy habits");

        let mut smoker = patient;
        smoker.smoking = true;
        let bullets = recommend(AssessmentMode::EarlyWarning, 1, &smoker);
        assert_eq!(bullets[4], "Smoking cessation program");
    }

    #[test]
    fn test_comprehensive_text() {
        let patient = baseline_patient();

        let positive = recommend(AssessmentMode::Comprehensive, 1, &patient);
        assert_eq!(positive[0], "Cardiology consultation within 1 week");
        assert_eq!(positive[4], "Cardiac rehabilitation referral");

        let negative = recommend(AssessmentMode::Comprehensive, 0, &patient);
        assert_eq!(negative[0], "Annual physical exam");
        assert_eq!(negative[4], "150 mins exercise/week");
    }

    #[test]
    fn test_recommendation_is_deterministic() {
        let patient = baseline_patient();
        let a = recommend(AssessmentMode::Comprehensive, 1, &patient);
        let b = recommend(AssessmentMode::Comprehensive, 1, &patient);
        assert_eq!(a, b);
    }

    #[test]
    fn test_risk_reduction_plan_thresholds() {
        let mut patient = baseline_patient();
        patient.resting_bp = 140;
        patient.cholesterol = 240;
        patient.diabetes = true;
        patient.stress_level = StressLevel::High;
        patient.smoking = true;
        patient.bmi = 31.0;
        patient.alcohol_intake = AlcoholIntake::Heavy;

        let plan = risk_reduction_plan(&patient);
        assert_eq!(plan.improvement[0], "Smoking cessation");
        assert_eq!(plan.improvement[1], "Weight management");
        assert_eq!(plan.improvement[2], "Increase physical activity");
        assert_eq!(plan.improvement[3], "Reduce alcohol consumption");
        assert_eq!(plan.monitoring[0], "Weekly blood pressure monitoring");
        assert_eq!(plan.monitoring[1], "Monthly cholesterol tests");
        assert_eq!(plan.monitoring[2], "Daily glucose monitoring");
        assert_eq!(plan.monitoring[3], "Stress management counseling");

        let calm = baseline_patient();
        let plan = risk_reduction_plan(&calm);
        assert_eq!(plan.monitoring[0], "Monthly blood pressure checks");
        assert_eq!(plan.monitoring[1], "Quarterly cholesterol test");
    }
}
