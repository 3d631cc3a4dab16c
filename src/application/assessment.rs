//! Assessment service: Orchestrates the risk assessment pipeline.
//!
//! This service coordinates:
//! - Feature encoding
//! - Scaling + classification with the mode-appropriate artifact pair
//! - Recommendation lookup
//! - History recording

use std::sync::Arc;

use crate::adapters::ModelBundle;
use crate::domain::{
    recommend, AssessmentMode, AssessmentResult, FeatureVector, HistoryRecord, PatientInput,
};
use crate::ports::{HistoryStore, InferenceError};

/// Scale and classify one encoded row with the pair selected by `mode`.
///
/// Every submission is re-scored; there is no inference cache.
///
/// # Errors
/// Returns error if scaling or scoring fails.
pub fn infer(
    mode: AssessmentMode,
    features: &FeatureVector,
    bundle: &ModelBundle,
) -> Result<(u8, f64), InferenceError> {
    tracing::debug!(?mode, "Scaling feature row");
    let scaled = bundle.scaler(mode).transform(&features.to_array())?;

    tracing::debug!(?mode, "Scoring scaled row");
    let model = bundle.model(mode);
    let probability = model.predict_probability(&scaled)?;
    let prediction = u8::from(probability >= model.threshold());

    Ok((prediction, probability))
}

/// Service for running risk assessments.
pub struct AssessmentService<H>
where
    H: HistoryStore,
{
    bundle: Arc<ModelBundle>,
    history: Arc<H>,
}

impl<H> AssessmentService<H>
where
    H: HistoryStore,
{
    /// Create a new assessment service.
    pub fn new(bundle: Arc<ModelBundle>, history: Arc<H>) -> Self {
        Self { bundle, history }
    }

    /// Run the full pipeline for one submitted form.
    ///
    /// Performs:
    /// 1. Feature encoding
    /// 2. Scaling + classification
    /// 3. Recommendation lookup
    /// 4. History append (duplicates are skipped; failures are non-fatal)
    ///
    /// # Errors
    /// Returns error if scaling or classification fails. The form stays
    /// re-submittable; nothing is recorded on failure.
    pub fn assess(
        &self,
        mode: AssessmentMode,
        patient: &PatientInput,
    ) -> crate::Result<AssessmentResult> {
        tracing::info!(?mode, id = %patient.id, "Starting assessment pipeline");

        let features = patient.encode();
        let (prediction, probability) = infer(mode, &features, &self.bundle)?;
        let recommendations = recommend(mode, prediction, patient);

        let result = AssessmentResult {
            mode,
            prediction,
            probability,
            recommendations,
        };

        let record = HistoryRecord::new(patient, &result, chrono::Utc::now());
        if let Err(e) = self.history.record(record) {
            tracing::warn!("Failed to record assessment in history: {:?}", e);
        }

        tracing::info!(
            "Assessment complete: prediction={}, probability={:.1}%, risk={}",
            result.prediction,
            result.probability * 100.0,
            result.risk_level()
        );

        Ok(result)
    }
}
