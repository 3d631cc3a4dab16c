//! Patient input types and the feature encoder.
//!
//! Field names and ordinal encodings match the training pipeline of the two
//! exported models (UCI-style heart disease features plus lifestyle factors).

use serde::{Deserialize, Serialize};

/// Number of columns in the encoded feature row.
pub const FEATURE_COUNT: usize = 17;

/// Feature names in the exact column order the scalers were fitted on.
///
/// This order is load-bearing: `PatientInput::encode` emits fields in this
/// order, and artifacts that carry `feature_names` are checked against it at
/// load time.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "age",
    "sex",
    "trestbps",
    "chol",
    "fbs",
    "thalach",
    "exang",
    "oldpeak",
    "bmi",
    "smoking",
    "alcohol_intake",
    "physical_activity",
    "family_history",
    "diabetes",
    "stress_level",
    "sleep_hours",
    "diet_score",
];

/// Biological sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    /// Training-time encoding: Male = 1, Female = 0.
    #[must_use]
    pub fn ordinal(self) -> f64 {
        match self {
            Self::Male => 1.0,
            Self::Female => 0.0,
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Male => write!(f, "Male"),
            Self::Female => write!(f, "Female"),
        }
    }
}

/// Alcohol intake level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlcoholIntake {
    None,
    Light,
    Moderate,
    Heavy,
}

impl AlcoholIntake {
    /// Training-time encoding: None = 0 .. Heavy = 3.
    #[must_use]
    pub fn ordinal(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Light => 1.0,
            Self::Moderate => 2.0,
            Self::Heavy => 3.0,
        }
    }
}

impl std::fmt::Display for AlcoholIntake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Light => write!(f, "Light"),
            Self::Moderate => write!(f, "Moderate"),
            Self::Heavy => write!(f, "Heavy"),
        }
    }
}

/// Physical activity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhysicalActivity {
    Sedentary,
    Light,
    Moderate,
    Active,
}

impl PhysicalActivity {
    /// Training-time encoding: Sedentary = 0 .. Active = 3.
    #[must_use]
    pub fn ordinal(self) -> f64 {
        match self {
            Self::Sedentary => 0.0,
            Self::Light => 1.0,
            Self::Moderate => 2.0,
            Self::Active => 3.0,
        }
    }
}

impl std::fmt::Display for PhysicalActivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sedentary => write!(f, "Sedentary"),
            Self::Light => write!(f, "Light"),
            Self::Moderate => write!(f, "Moderate"),
            Self::Active => write!(f, "Active"),
        }
    }
}

/// Self-reported stress level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressLevel {
    Low,
    Moderate,
    High,
}

impl StressLevel {
    /// Training-time encoding: Low = 0, Moderate = 1, High = 2.
    #[must_use]
    pub fn ordinal(self) -> f64 {
        match self {
            Self::Low => 0.0,
            Self::Moderate => 1.0,
            Self::High => 2.0,
        }
    }
}

impl std::fmt::Display for StressLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Moderate => write!(f, "Moderate"),
            Self::High => write!(f, "High"),
        }
    }
}

/// One assessment's raw patient attributes, immutable once submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientInput {
    /// Patient identifier (free text, local only)
    pub id: String,

    /// Patient name
    pub name: String,

    /// Age in years (18-100)
    pub age: u32,

    /// Biological sex
    pub sex: Sex,

    /// Resting blood pressure in mm Hg (90-200)
    pub resting_bp: u32,

    /// Serum cholesterol in mg/dl (100-600)
    pub cholesterol: u32,

    /// Fasting blood sugar > 120 mg/dl
    pub fasting_blood_sugar: bool,

    /// Maximum heart rate achieved (70-220)
    pub max_heart_rate: u32,

    /// Exercise induced angina
    pub exercise_angina: bool,

    /// ST depression induced by exercise (0.0-10.0)
    pub st_depression: f64,

    /// Body mass index (15.0-50.0)
    pub bmi: f64,

    /// Current smoker
    pub smoking: bool,

    /// Alcohol intake level
    pub alcohol_intake: AlcoholIntake,

    /// Physical activity level
    pub physical_activity: PhysicalActivity,

    /// Family history of heart disease
    pub family_history: bool,

    /// Diagnosed diabetes
    pub diabetes: bool,

    /// Self-reported stress level
    pub stress_level: StressLevel,

    /// Average sleep hours per night (4-12)
    pub sleep_hours: u32,

    /// Diet quality score (1-10)
    pub diet_score: u32,
}

/// Encoded feature row: `PatientInput` mapped to 17 numeric fields.
///
/// The struct layout pins the column order as a compile-time contract; the
/// string-keyed dynamic rows of the original pipeline are deliberately gone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub age: f64,
    pub sex: f64,
    pub trestbps: f64,
    pub chol: f64,
    pub fbs: f64,
    pub thalach: f64,
    pub exang: f64,
    pub oldpeak: f64,
    pub bmi: f64,
    pub smoking: f64,
    pub alcohol_intake: f64,
    pub physical_activity: f64,
    pub family_history: f64,
    pub diabetes: f64,
    pub stress_level: f64,
    pub sleep_hours: f64,
    pub diet_score: f64,
}

impl FeatureVector {
    /// Flatten to an array in the training-time column order.
    #[must_use]
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.age,
            self.sex,
            self.trestbps,
            self.chol,
            self.fbs,
            self.thalach,
            self.exang,
            self.oldpeak,
            self.bmi,
            self.smoking,
            self.alcohol_intake,
            self.physical_activity,
            self.family_history,
            self.diabetes,
            self.stress_level,
            self.sleep_hours,
            self.diet_score,
        ]
    }
}

fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}

impl PatientInput {
    /// Encode this input as a fixed-order feature row.
    ///
    /// Pure and total over every valid input; out-of-range values are the
    /// input boundary's problem (see [`PatientInput::validate`]), not this
    /// function's.
    #[must_use]
    pub fn encode(&self) -> FeatureVector {
        FeatureVector {
            age: f64::from(self.age),
            sex: self.sex.ordinal(),
            trestbps: f64::from(self.resting_bp),
            chol: f64::from(self.cholesterol),
            fbs: flag(self.fasting_blood_sugar),
            thalach: f64::from(self.max_heart_rate),
            exang: flag(self.exercise_angina),
            oldpeak: self.st_depression,
            bmi: self.bmi,
            smoking: flag(self.smoking),
            alcohol_intake: self.alcohol_intake.ordinal(),
            physical_activity: self.physical_activity.ordinal(),
            family_history: flag(self.family_history),
            diabetes: flag(self.diabetes),
            stress_level: self.stress_level.ordinal(),
            sleep_hours: f64::from(self.sleep_hours),
            diet_score: f64::from(self.diet_score),
        }
    }

    /// Validate that all numeric fields are within the form's ranges.
    ///
    /// # Errors
    /// Returns validation errors as a vector of strings.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if !(18..=100).contains(&self.age) {
            errors.push(format!("Age {} out of range [18, 100]", self.age));
        }
        if !(90..=200).contains(&self.resting_bp) {
            errors.push(format!(
                "Resting blood pressure {} out of range [90, 200]",
                self.resting_bp
            ));
        }
        if !(100..=600).contains(&self.cholesterol) {
            errors.push(format!(
                "Cholesterol {} out of range [100, 600]",
                self.cholesterol
            ));
        }
        if !(70..=220).contains(&self.max_heart_rate) {
            errors.push(format!(
                "Max heart rate {} out of range [70, 220]",
                self.max_heart_rate
            ));
        }
        if !(0.0..=10.0).contains(&self.st_depression) {
            errors.push(format!(
                "ST depression {} out of range [0.0, 10.0]",
                self.st_depression
            ));
        }
        if !(15.0..=50.0).contains(&self.bmi) {
            errors.push(format!("BMI {} out of range [15.0, 50.0]", self.bmi));
        }
        if !(4..=12).contains(&self.sleep_hours) {
            errors.push(format!(
                "Sleep hours {} out of range [4, 12]",
                self.sleep_hours
            ));
        }
        if !(1..=10).contains(&self.diet_score) {
            errors.push(format!(
                "Diet score {} out of range [1, 10]",
                self.diet_score
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
pub(crate) fn baseline_patient() -> PatientInput {
    PatientInput {
        id: "P-1001".to_string(),
        name: "John Doe".to_string(),
        age: 45,
        sex: Sex::Male,
        resting_bp: 120,
        cholesterol: 200,
        fasting_blood_sugar: false,
        max_heart_rate: 150,
        exercise_angina: false,
        st_depression: 0.0,
        bmi: 25.0,
        smoking: false,
        alcohol_intake: AlcoholIntake::None,
        physical_activity: PhysicalActivity::Sedentary,
        family_history: false,
        diabetes: false,
        stress_level: StressLevel::Low,
        sleep_hours: 7,
        diet_score: 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_encoding() {
        let encoded = baseline_patient().encode().to_array();
        let expected = [
            45.0, 1.0, 120.0, 200.0, 0.0, 150.0, 0.0, 0.0, 25.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
            7.0, 6.0,
        ];
        assert_eq!(encoded, expected);
    }

    #[test]
    fn test_encoding_is_total_and_finite() {
        let alcohol = [
            AlcoholIntake::None,
            AlcoholIntake::Light,
            AlcoholIntake::Moderate,
            AlcoholIntake::Heavy,
        ];
        let activity = [
            PhysicalActivity::Sedentary,
            PhysicalActivity::Light,
            PhysicalActivity::Moderate,
            PhysicalActivity::Active,
        ];
        let stress = [StressLevel::Low, StressLevel::Moderate, StressLevel::High];

        for &a in &alcohol {
            for &p in &activity {
                for &s in &stress {
                    for &sex in &[Sex::Female, Sex::Male] {
                        let mut patient = baseline_patient();
                        patient.alcohol_intake = a;
                        patient.physical_activity = p;
                        patient.stress_level = s;
                        patient.sex = sex;

                        let row = patient.encode().to_array();
                        assert_eq!(row.len(), FEATURE_COUNT);
                        assert!(row.iter().all(|x| x.is_finite()));
                        // Same input, same row.
                        assert_eq!(row, patient.encode().to_array());
                    }
                }
            }
        }
    }

    #[test]
    fn test_ordinal_tables() {
        assert_eq!(Sex::Male.ordinal(), 1.0);
        assert_eq!(Sex::Female.ordinal(), 0.0);

        assert_eq!(AlcoholIntake::None.ordinal(), 0.0);
        assert_eq!(AlcoholIntake::Light.ordinal(), 1.0);
        assert_eq!(AlcoholIntake::Moderate.ordinal(), 2.0);
        assert_eq!(AlcoholIntake::Heavy.ordinal(), 3.0);

        assert_eq!(PhysicalActivity::Sedentary.ordinal(), 0.0);
        assert_eq!(PhysicalActivity::Light.ordinal(), 1.0);
        assert_eq!(PhysicalActivity::Moderate.ordinal(), 2.0);
        assert_eq!(PhysicalActivity::Active.ordinal(), 3.0);

        assert_eq!(StressLevel::Low.ordinal(), 0.0);
        assert_eq!(StressLevel::Moderate.ordinal(), 1.0);
        assert_eq!(StressLevel::High.ordinal(), 2.0);
    }

    #[test]
    fn test_ordinals_are_distinct_within_field() {
        let alcohol: Vec<f64> = [
            AlcoholIntake::None,
            AlcoholIntake::Light,
            AlcoholIntake::Moderate,
            AlcoholIntake::Heavy,
        ]
        .iter()
        .map(|a| a.ordinal())
        .collect();
        for i in 0..alcohol.len() {
            for j in (i + 1)..alcohol.len() {
                assert_ne!(alcohol[i], alcohol[j]);
            }
        }

        let activity: Vec<f64> = [
            PhysicalActivity::Sedentary,
            PhysicalActivity::Light,
            PhysicalActivity::Moderate,
            PhysicalActivity::Active,
        ]
        .iter()
        .map(|p| p.ordinal())
        .collect();
        for i in 0..activity.len() {
            for j in (i + 1)..activity.len() {
                assert_ne!(activity[i], activity[j]);
            }
        }

        let stress: Vec<f64> = [StressLevel::Low, StressLevel::Moderate, StressLevel::High]
            .iter()
            .map(|s| s.ordinal())
            .collect();
        for i in 0..stress.len() {
            for j in (i + 1)..stress.len() {
                assert_ne!(stress[i], stress[j]);
            }
        }
    }

    #[test]
    fn test_feature_names_match_struct_order() {
        assert_eq!(FEATURE_NAMES.len(), FEATURE_COUNT);
        assert_eq!(FEATURE_NAMES[0], "age");
        assert_eq!(FEATURE_NAMES[7], "oldpeak");
        assert_eq!(FEATURE_NAMES[16], "diet_score");
    }

    #[test]
    fn test_validation() {
        assert!(baseline_patient().validate().is_ok());

        let mut invalid = baseline_patient();
        invalid.age = 10;
        invalid.bmi = 60.0;
        let errors = invalid.validate().expect_err("should reject");
        assert_eq!(errors.len(), 2);
    }
}
