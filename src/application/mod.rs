//! Application layer: Use cases orchestrating domain and ports.

mod assessment;
mod history;

pub use assessment::{infer, AssessmentService};
pub use history::HistoryService;
