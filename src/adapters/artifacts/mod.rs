//! Artifact adapter: JSON model/scaler loading.
//!
//! The training pipeline exports each classifier as a logistic-regression
//! artifact and each scaler as a standard-scaler artifact, both JSON. Four
//! files under one base directory make up a full bundle; a missing or
//! malformed file is a fatal startup condition, never retried.
//!
//! Artifacts are validated at load: 17 columns, finite parameters, non-zero
//! scales, and (when the export carries them) feature names in exactly the
//! encoder's emission order. After that the bundle is read-only and shared.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use serde::Deserialize;

use crate::domain::{AssessmentMode, FEATURE_COUNT, FEATURE_NAMES};
use crate::ports::{FeatureScaler, InferenceError, RiskModel};

/// Logical artifact names mapped to their file names under the base directory.
pub const ARTIFACT_FILES: [(&str, &str); 4] = [
    ("early_model", "early_warning_model.json"),
    ("comprehensive_model", "heart_disease_model.json"),
    ("early_scaler", "early_warning_scaler.json"),
    ("comprehensive_scaler", "heart_disease_scaler.json"),
];

/// Error type for artifact loading.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Missing artifact: {file}")]
    Missing { file: String },

    #[error("Failed to read artifact {file}: {source}")]
    Io {
        file: String,
        source: std::io::Error,
    },

    #[error("Invalid artifact format in {file}: {source}")]
    Format {
        file: String,
        source: serde_json::Error,
    },

    #[error("Invalid artifact {file}: {reason}")]
    Invalid { file: String, reason: String },
}

/// Standard-scaler parameters fixed at training time.
#[derive(Debug, Clone, Deserialize)]
pub struct StandardScalerArtifact {
    /// Column names, if the export carries them
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,

    /// Per-column mean
    pub mean: Vec<f64>,

    /// Per-column scale (standard deviation)
    pub scale: Vec<f64>,
}

impl StandardScalerArtifact {
    fn validate(&self, file: &str) -> Result<(), ArtifactError> {
        check_columns(file, "mean", &self.mean)?;
        check_columns(file, "scale", &self.scale)?;
        if let Some(column) = self.scale.iter().position(|s| *s == 0.0) {
            return Err(ArtifactError::Invalid {
                file: file.to_string(),
                reason: format!("scale is zero at column {column}"),
            });
        }
        check_feature_names(file, self.feature_names.as_deref())
    }
}

impl FeatureScaler for StandardScalerArtifact {
    fn transform(
        &self,
        row: &[f64; FEATURE_COUNT],
    ) -> Result<[f64; FEATURE_COUNT], InferenceError> {
        let mut scaled = [0.0; FEATURE_COUNT];
        for (column, out) in scaled.iter_mut().enumerate() {
            *out = (row[column] - self.mean[column]) / self.scale[column];
            if !out.is_finite() {
                return Err(InferenceError::NonFiniteScaled { column });
            }
        }
        Ok(scaled)
    }
}

fn default_threshold() -> f64 {
    0.5
}

/// Logistic-regression parameters fixed at training time.
#[derive(Debug, Clone, Deserialize)]
pub struct LogisticModelArtifact {
    /// Column names, if the export carries them
    #[serde(default)]
    pub feature_names: Option<Vec<String>>,

    /// Per-column coefficients
    pub coefficients: Vec<f64>,

    /// Intercept term
    pub intercept: f64,

    /// Decision threshold for the positive label
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl LogisticModelArtifact {
    fn validate(&self, file: &str) -> Result<(), ArtifactError> {
        check_columns(file, "coefficients", &self.coefficients)?;
        if !self.intercept.is_finite() {
            return Err(ArtifactError::Invalid {
                file: file.to_string(),
                reason: "intercept is not finite".to_string(),
            });
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ArtifactError::Invalid {
                file: file.to_string(),
                reason: format!("threshold {} outside [0, 1]", self.threshold),
            });
        }
        check_feature_names(file, self.feature_names.as_deref())
    }
}

impl RiskModel for LogisticModelArtifact {
    fn predict_probability(
        &self,
        scaled: &[f64; FEATURE_COUNT],
    ) -> Result<f64, InferenceError> {
        let z: f64 = self
            .coefficients
            .iter()
            .zip(scaled.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept;
        let probability = 1.0 / (1.0 + (-z).exp());
        if !probability.is_finite() {
            return Err(InferenceError::NonFiniteProbability);
        }
        if !(0.0..=1.0).contains(&probability) {
            return Err(InferenceError::ProbabilityOutOfRange(probability));
        }
        Ok(probability)
    }

    fn threshold(&self) -> f64 {
        self.threshold
    }
}

fn check_columns(file: &str, field: &str, values: &[f64]) -> Result<(), ArtifactError> {
    if values.len() != FEATURE_COUNT {
        return Err(ArtifactError::Invalid {
            file: file.to_string(),
            reason: format!(
                "{field} has {} columns, expected {FEATURE_COUNT}",
                values.len()
            ),
        });
    }
    if let Some(column) = values.iter().position(|v| !v.is_finite()) {
        return Err(ArtifactError::Invalid {
            file: file.to_string(),
            reason: format!("{field} is not finite at column {column}"),
        });
    }
    Ok(())
}

fn check_feature_names(file: &str, names: Option<&[String]>) -> Result<(), ArtifactError> {
    let Some(names) = names else { return Ok(()) };
    if names.len() != FEATURE_COUNT
        || names.iter().zip(FEATURE_NAMES).any(|(a, b)| a.as_str() != b)
    {
        return Err(ArtifactError::Invalid {
            file: file.to_string(),
            reason: format!(
                "feature names do not match the encoder column order, expected {FEATURE_NAMES:?}"
            ),
        });
    }
    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, file: &str) -> Result<T, ArtifactError> {
    let bytes = std::fs::read(path).map_err(|source| ArtifactError::Io {
        file: file.to_string(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Format {
        file: file.to_string(),
        source,
    })
}

/// The four trained artifacts, loaded once and shared read-only.
pub struct ModelBundle {
    early_model: Box<dyn RiskModel>,
    comprehensive_model: Box<dyn RiskModel>,
    early_scaler: Box<dyn FeatureScaler>,
    comprehensive_scaler: Box<dyn FeatureScaler>,
}

// The trait objects carry no Debug bound, so the bundle prints opaquely.
impl std::fmt::Debug for ModelBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelBundle").finish_non_exhaustive()
    }
}

impl ModelBundle {
    /// Load and validate all four artifacts under `base_dir`.
    ///
    /// Existence of every file is checked before anything is deserialized, so
    /// a partial bundle is never returned.
    ///
    /// # Errors
    /// Returns `ArtifactError::Missing` naming the first absent file, or a
    /// format/validation error for a corrupt one.
    pub fn load(base_dir: &Path) -> Result<Self, ArtifactError> {
        for (_, file) in ARTIFACT_FILES {
            if !base_dir.join(file).exists() {
                return Err(ArtifactError::Missing {
                    file: file.to_string(),
                });
            }
        }

        let path = |file: &str| -> PathBuf { base_dir.join(file) };
        let (_, early_model_file) = ARTIFACT_FILES[0];
        let (_, comprehensive_model_file) = ARTIFACT_FILES[1];
        let (_, early_scaler_file) = ARTIFACT_FILES[2];
        let (_, comprehensive_scaler_file) = ARTIFACT_FILES[3];

        let early_model: LogisticModelArtifact =
            read_json(&path(early_model_file), early_model_file)?;
        early_model.validate(early_model_file)?;

        let comprehensive_model: LogisticModelArtifact =
            read_json(&path(comprehensive_model_file), comprehensive_model_file)?;
        comprehensive_model.validate(comprehensive_model_file)?;

        let early_scaler: StandardScalerArtifact =
            read_json(&path(early_scaler_file), early_scaler_file)?;
        early_scaler.validate(early_scaler_file)?;

        let comprehensive_scaler: StandardScalerArtifact =
            read_json(&path(comprehensive_scaler_file), comprehensive_scaler_file)?;
        comprehensive_scaler.validate(comprehensive_scaler_file)?;

        tracing::info!(dir = %base_dir.display(), "Loaded model bundle");

        Ok(Self {
            early_model: Box::new(early_model),
            comprehensive_model: Box::new(comprehensive_model),
            early_scaler: Box::new(early_scaler),
            comprehensive_scaler: Box::new(comprehensive_scaler),
        })
    }

    /// Assemble a bundle from already-constructed parts. Used by tests to
    /// substitute instrumented models.
    #[must_use]
    pub fn from_parts(
        early_model: Box<dyn RiskModel>,
        comprehensive_model: Box<dyn RiskModel>,
        early_scaler: Box<dyn FeatureScaler>,
        comprehensive_scaler: Box<dyn FeatureScaler>,
    ) -> Self {
        Self {
            early_model,
            comprehensive_model,
            early_scaler,
            comprehensive_scaler,
        }
    }

    /// The classifier for the given mode.
    #[must_use]
    pub fn model(&self, mode: AssessmentMode) -> &dyn RiskModel {
        match mode {
            AssessmentMode::EarlyWarning => self.early_model.as_ref(),
            AssessmentMode::Comprehensive => self.comprehensive_model.as_ref(),
        }
    }

    /// The scaler for the given mode.
    #[must_use]
    pub fn scaler(&self, mode: AssessmentMode) -> &dyn FeatureScaler {
        match mode {
            AssessmentMode::EarlyWarning => self.early_scaler.as_ref(),
            AssessmentMode::Comprehensive => self.comprehensive_scaler.as_ref(),
        }
    }
}

static BUNDLE: OnceLock<Arc<ModelBundle>> = OnceLock::new();

/// Process-wide memoized bundle.
///
/// The first successful call loads from disk; every later call hands out the
/// same in-memory instance without touching the filesystem again.
///
/// # Errors
/// Returns error if no bundle is cached yet and loading fails.
pub fn shared(base_dir: &Path) -> Result<Arc<ModelBundle>, ArtifactError> {
    if let Some(bundle) = BUNDLE.get() {
        return Ok(Arc::clone(bundle));
    }
    let loaded = Arc::new(ModelBundle::load(base_dir)?);
    Ok(Arc::clone(BUNDLE.get_or_init(|| loaded)))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Write a valid four-artifact bundle into `dir`.
    pub fn write_bundle(dir: &Path) {
        let names: Vec<String> = FEATURE_NAMES.iter().map(|s| (*s).to_string()).collect();
        let model = serde_json::json!({
            "feature_names": names,
            "coefficients": vec![0.1; FEATURE_COUNT],
            "intercept": -0.5,
            "threshold": 0.5,
        });
        let scaler = serde_json::json!({
            "feature_names": names,
            "mean": vec![0.0; FEATURE_COUNT],
            "scale": vec![1.0; FEATURE_COUNT],
        });
        for (logical, file) in ARTIFACT_FILES {
            let value = if logical.ends_with("model") {
                &model
            } else {
                &scaler
            };
            std::fs::write(dir.join(file), serde_json::to_vec_pretty(value).unwrap()).unwrap();
        }
    }
}
