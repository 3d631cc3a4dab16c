//! Model ports: Traits for the trained scaler/classifier artifacts.
//!
//! The artifacts themselves are opaque; these traits are the narrow seam the
//! application sees, so tests can substitute instrumented stubs.

use crate::domain::FEATURE_COUNT;

/// Errors that can occur while scaling or scoring a feature row.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InferenceError {
    #[error("Scaler produced a non-finite value at column {column}")]
    NonFiniteScaled { column: usize },

    #[error("Model produced a non-finite probability")]
    NonFiniteProbability,

    #[error("Probability {0} outside [0, 1]")]
    ProbabilityOutOfRange(f64),
}

/// Affine feature scaler fitted at training time.
///
/// Implementations apply `scaled = (x - mean) / scale` column-wise. One row
/// per call; no batching.
pub trait FeatureScaler: Send + Sync {
    /// Scale a single encoded feature row.
    ///
    /// # Errors
    /// Returns error if the transform produces a non-finite value.
    fn transform(
        &self,
        row: &[f64; FEATURE_COUNT],
    ) -> Result<[f64; FEATURE_COUNT], InferenceError>;
}

/// Binary risk classifier over a scaled feature row.
pub trait RiskModel: Send + Sync {
    /// Probability assigned to the positive ("at risk") class.
    ///
    /// # Errors
    /// Returns error if scoring produces a value outside [0, 1].
    fn predict_probability(
        &self,
        scaled: &[f64; FEATURE_COUNT],
    ) -> Result<f64, InferenceError>;

    /// Decision threshold for the positive label.
    fn threshold(&self) -> f64 {
        0.5
    }
}
