//! Assessment history types.
//!
//! A `HistoryRecord` is a flattened, display-oriented projection of one
//! successful assessment. Records live only for the process's run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AssessmentResult, PatientInput};

/// History table column names, in schema order. CSV export follows this order.
pub const HISTORY_COLUMNS: [&str; 8] = [
    "id",
    "name",
    "age",
    "sex",
    "risk_level",
    "probability",
    "timestamp",
    "mode",
];

/// One row of the assessment history.
///
/// Structural equality over all fields (including the timestamp) drives the
/// store's de-duplication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Patient identifier
    pub id: String,

    /// Patient name
    pub name: String,

    /// Age in years
    pub age: u32,

    /// Biological sex, as entered
    pub sex: String,

    /// "High" or "Low", following the binary prediction
    pub risk_level: String,

    /// Positive-class probability (0.0 to 1.0)
    pub probability: f64,

    /// When the assessment ran
    pub timestamp: DateTime<Utc>,

    /// Assessment mode name
    pub mode: String,
}

impl HistoryRecord {
    /// Project an assessment into a history row.
    #[must_use]
    pub fn new(
        patient: &PatientInput,
        result: &AssessmentResult,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: patient.id.clone(),
            name: patient.name.clone(),
            age: patient.age,
            sex: patient.sex.to_string(),
            risk_level: if result.prediction == 1 { "High" } else { "Low" }.to_string(),
            probability: result.probability,
            timestamp,
            mode: result.mode.to_string(),
        }
    }

    /// Timestamp formatted for tables and CSV export.
    #[must_use]
    pub fn timestamp_display(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// Aggregate metrics over the stored history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistorySummary {
    /// Total number of stored assessments
    pub count: usize,

    /// Assessments with a "High" risk level
    pub high_risk_count: usize,

    /// Assessments with a "Low" risk level
    pub low_risk_count: usize,

    /// Mean positive-class probability (0.0 when empty)
    pub average_probability: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::patient::baseline_patient;
    use crate::domain::AssessmentMode;
    use chrono::TimeZone;

    fn sample_result() -> AssessmentResult {
        AssessmentResult {
            mode: AssessmentMode::EarlyWarning,
            prediction: 1,
            probability: 0.81,
            recommendations: vec!["Consult a cardiologist within 2 weeks".to_string()],
        }
    }

    #[test]
    fn test_record_projection() {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();
        let record = HistoryRecord::new(&baseline_patient(), &sample_result(), at);

        assert_eq!(record.id, "P-1001");
        assert_eq!(record.sex, "Male");
        assert_eq!(record.risk_level, "High");
        assert_eq!(record.mode, "Early Warning");
        assert_eq!(record.timestamp_display(), "2025-06-01 09:30");
    }

    #[test]
    fn test_equal_records_compare_equal() {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 9, 30, 0).unwrap();
        let a = HistoryRecord::new(&baseline_patient(), &sample_result(), at);
        let b = HistoryRecord::new(&baseline_patient(), &sample_result(), at);
        assert_eq!(a, b);

        let later = at + chrono::Duration::minutes(1);
        let c = HistoryRecord::new(&baseline_patient(), &sample_result(), later);
        assert_ne!(a, c);
    }
}
