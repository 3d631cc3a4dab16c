//! History port: Trait for the assessment history store.
//!
//! The store is process-wide, append-only and de-duplicated; implementations
//! own the locking needed for shared mutable access.

use crate::domain::{HistoryRecord, HistorySummary};

/// Trait for assessment history operations.
pub trait HistoryStore: Send + Sync {
    /// Error type for history operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Append a record unless a structurally identical one is already stored.
    ///
    /// # Returns
    /// `true` if the record was appended, `false` if it was a duplicate.
    ///
    /// # Errors
    /// Returns error if the store cannot be accessed.
    fn record(&self, record: HistoryRecord) -> Result<bool, Self::Error>;

    /// All stored records, in insertion order.
    ///
    /// # Errors
    /// Returns error if the store cannot be accessed.
    fn records(&self) -> Result<Vec<HistoryRecord>, Self::Error>;

    /// Total number of stored records.
    ///
    /// # Errors
    /// Returns error if the store cannot be accessed.
    fn count(&self) -> Result<usize, Self::Error>;

    /// Aggregate metrics over the stored records.
    ///
    /// # Errors
    /// Returns error if the store cannot be accessed.
    fn summarize(&self) -> Result<HistorySummary, Self::Error>;

    /// Serialize all records as CSV (UTF-8, header always present).
    ///
    /// # Errors
    /// Returns error if the store cannot be accessed or serialization fails.
    fn export_csv(&self) -> Result<Vec<u8>, Self::Error>;
}
