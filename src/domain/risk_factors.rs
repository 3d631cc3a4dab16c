//! Factor-impact heuristic tables for the illustrative charts.
//!
//! These values are hand-authored display constants and threshold rules, not
//! feature importances from either classifier. They exist solely to feed the
//! bar-chart descriptors.

use super::{AlcoholIntake, PatientInput, PhysicalActivity, StressLevel};

/// A named factor with its chart impact value.
pub type FactorImpact = (&'static str, f64);

/// Static contributing-factor weights shown with early-warning results.
pub const EARLY_FACTOR_IMPACTS: [FactorImpact; 10] = [
    ("Age", 0.25),
    ("Cholesterol", 0.20),
    ("Blood Pressure", 0.18),
    ("BMI", 0.15),
    ("Lifestyle", 0.12),
    ("Family History", 0.10),
    ("Smoking", 0.08),
    ("Diet", 0.07),
    ("Stress", 0.05),
    ("Sleep", 0.03),
];

/// Modifiable risk factor impacts for the comprehensive breakdown.
#[must_use]
pub fn modifiable_factors(patient: &PatientInput) -> Vec<FactorImpact> {
    vec![
        ("Smoking", if patient.smoking { 0.8 } else { 0.0 }),
        (
            "BMI",
            if patient.bmi > 30.0 {
                0.6
            } else if patient.bmi > 25.0 {
                0.3
            } else {
                0.0
            },
        ),
        (
            "Activity",
            if matches!(
                patient.physical_activity,
                PhysicalActivity::Sedentary | PhysicalActivity::Light
            ) {
                0.7
            } else {
                0.0
            },
        ),
        (
            "Alcohol",
            if matches!(
                patient.alcohol_intake,
                AlcoholIntake::Moderate | AlcoholIntake::Heavy
            ) {
                0.5
            } else {
                0.0
            },
        ),
        (
            "Diet",
            if patient.diet_score < 5 {
                0.4
            } else if patient.diet_score < 7 {
                0.2
            } else {
                0.0
            },
        ),
        (
            "Stress",
            match patient.stress_level {
                StressLevel::High => 0.3,
                StressLevel::Moderate => 0.1,
                StressLevel::Low => 0.0,
            },
        ),
    ]
}

/// Non-modifiable risk factor impacts for the comprehensive breakdown.
#[must_use]
pub fn non_modifiable_factors(patient: &PatientInput) -> Vec<FactorImpact> {
    vec![
        ("Age", (f64::from(patient.age) / 100.0).min(0.9)),
        (
            "Family History",
            if patient.family_history { 0.7 } else { 0.0 },
        ),
        (
            "Sex",
            match patient.sex {
                super::Sex::Male => 0.4,
                super::Sex::Female => 0.2,
            },
        ),
        // Genetics proxy, driven by family history.
        ("Genetics", if patient.family_history { 0.3 } else { 0.1 }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::patient::{baseline_patient, Sex};

    #[test]
    fn test_modifiable_constants() {
        let mut patient = baseline_patient();
        patient.smoking = true;
        patient.bmi = 31.0;
        patient.alcohol_intake = AlcoholIntake::Moderate;
        patient.diet_score = 4;
        patient.stress_level = StressLevel::High;

        let impacts = modifiable_factors(&patient);
        assert_eq!(impacts[0], ("Smoking", 0.8));
        assert_eq!(impacts[1], ("BMI", 0.6));
        assert_eq!(impacts[2], ("Activity", 0.7)); // baseline is Sedentary
        assert_eq!(impacts[3], ("Alcohol", 0.5));
        assert_eq!(impacts[4], ("Diet", 0.4));
        assert_eq!(impacts[5], ("Stress", 0.3));
    }

    #[test]
    fn test_modifiable_middle_bands() {
        let mut patient = baseline_patient();
        patient.bmi = 26.0;
        patient.diet_score = 6;
        patient.stress_level = StressLevel::Moderate;
        patient.physical_activity = PhysicalActivity::Active;

        let impacts = modifiable_factors(&patient);
        assert_eq!(impacts[0], ("Smoking", 0.0));
        assert_eq!(impacts[1], ("BMI", 0.3));
        assert_eq!(impacts[2], ("Activity", 0.0));
        assert_eq!(impacts[4], ("Diet", 0.2));
        assert_eq!(impacts[5], ("Stress", 0.1));
    }

    #[test]
    fn test_non_modifiable_constants() {
        let mut patient = baseline_patient();
        patient.family_history = true;

        let impacts = non_modifiable_factors(&patient);
        assert_eq!(impacts[0], ("Age", 0.45));
        assert_eq!(impacts[1], ("Family History", 0.7));
        assert_eq!(impacts[2], ("Sex", 0.4));
        assert_eq!(impacts[3], ("Genetics", 0.3));

        patient.sex = Sex::Female;
        patient.family_history = false;
        patient.age = 95; // capped at 0.9
        let impacts = non_modifiable_factors(&patient);
        assert_eq!(impacts[0], ("Age", 0.9));
        assert_eq!(impacts[1], ("Family History", 0.0));
        assert_eq!(impacts[2], ("Sex", 0.2));
        assert_eq!(impacts[3], ("Genetics", 0.1));
    }

    #[test]
    fn test_early_weights_are_descending() {
        for pair in EARLY_FACTOR_IMPACTS.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }
}
