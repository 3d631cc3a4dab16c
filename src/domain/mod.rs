//! Domain layer: Core types and pure logic.

pub mod assessment;
pub mod history;
pub mod patient;
pub mod recommendations;
pub mod risk_factors;

pub use assessment::{AssessmentMode, AssessmentResult, RiskLevel};
pub use history::{HistoryRecord, HistorySummary, HISTORY_COLUMNS};
pub use patient::{
    AlcoholIntake, FeatureVector, PatientInput, PhysicalActivity, Sex, StressLevel,
    FEATURE_COUNT, FEATURE_NAMES,
};
pub use recommendations::{recommend, risk_reduction_plan, RiskReductionPlan};
