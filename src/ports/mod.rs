//! Ports layer: Trait definitions for external operations.
//!
//! Following Hexagonal Architecture, these traits define the boundaries
//! between the application and external systems (model artifacts, storage).

mod history;
mod model;

pub use history::HistoryStore;
pub use model::{FeatureScaler, InferenceError, RiskModel};
