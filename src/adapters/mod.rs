//! Adapters layer: Concrete implementations of the ports.

pub mod artifacts;
pub mod history;

pub use artifacts::{ArtifactError, ModelBundle};
pub use history::{HistoryError, InMemoryHistory};
