//! # CardioCare
//!
//! Cardiac risk assessment engine.
//!
//! This crate provides the typed backend for a clinical decision-support
//! pipeline: it encodes raw patient attributes into a fixed-order feature
//! vector, runs one of two pre-trained classifier/scaler pairs over it, and
//! turns the result into recommendation text, a PDF report, chart
//! descriptors, and an in-memory assessment history.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core types (patient input, encoder, assessment, recommendations)
//! - `ports`: Trait definitions for model artifacts and the history store
//! - `adapters`: Concrete implementations (JSON artifacts, in-memory history)
//! - `application`: Use cases orchestrating domain and ports
//! - `report`: PDF rendering and chart descriptors

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod report;

pub use domain::{AssessmentMode, AssessmentResult, PatientInput, RiskLevel};

/// Result type for CardioCare operations
pub type Result<T> = std::result::Result<T, CardioError>;

/// Main error type for CardioCare
#[derive(Debug, thiserror::Error)]
pub enum CardioError {
    #[error("Model artifact error: {0}")]
    Artifact(#[from] adapters::artifacts::ArtifactError),

    #[error("Inference failed: {0}")]
    Inference(#[from] ports::InferenceError),

    #[error("Invalid patient data: {0}")]
    Validation(String),

    #[error("History store error: {0}")]
    History(#[from] adapters::history::HistoryError),

    #[error("Report rendering failed: {0}")]
    Report(#[from] report::ReportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
