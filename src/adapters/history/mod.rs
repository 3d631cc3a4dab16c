//! In-memory history adapter: Implementation of `HistoryStore`.
//!
//! Append-only, de-duplicated, process-lifetime only. No eviction, no size
//! bound, no persistence; everything is lost on restart.
//!
//! # Mutex Behavior
//!
//! The record list is protected by `Mutex`. A poisoned mutex (from panic in
//! another thread) will cause panic. This fail-fast behavior is intentional
//! for data integrity in healthcare applications.

use std::sync::Mutex;

use crate::domain::{HistoryRecord, HistorySummary, HISTORY_COLUMNS};
use crate::ports::HistoryStore;

/// Error type for history operations.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV writer error: {0}")]
    CsvFlush(String),
}

/// Mutex-guarded in-memory history store.
#[derive(Default)]
pub struct InMemoryHistory {
    records: Mutex<Vec<HistoryRecord>>,
}

impl InMemoryHistory {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for InMemoryHistory {
    type Error = HistoryError;

    fn record(&self, record: HistoryRecord) -> Result<bool, HistoryError> {
        let mut records = self.records.lock().expect("Lock failed");
        // O(n) structural scan; fine at single-operator scale.
        if records.contains(&record) {
            tracing::debug!(id = %record.id, "Skipping duplicate history record");
            return Ok(false);
        }
        records.push(record);
        Ok(true)
    }

    fn records(&self) -> Result<Vec<HistoryRecord>, HistoryError> {
        Ok(self.records.lock().expect("Lock failed").clone())
    }

    fn count(&self) -> Result<usize, HistoryError> {
        Ok(self.records.lock().expect("Lock failed").len())
    }

    fn summarize(&self) -> Result<HistorySummary, HistoryError> {
        let records = self.records.lock().expect("Lock failed");
        let count = records.len();
        let high_risk_count = records.iter().filter(|r| r.risk_level == "High").count();
        let low_risk_count = records.iter().filter(|r| r.risk_level == "Low").count();
        let average_probability = if count == 0 {
            0.0
        } else {
            records.iter().map(|r| r.probability).sum::<f64>() / count as f64
        };

        Ok(HistorySummary {
            count,
            high_risk_count,
            low_risk_count,
            average_probability,
        })
    }

    fn export_csv(&self) -> Result<Vec<u8>, HistoryError> {
        let records = self.records.lock().expect("Lock failed");

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(HISTORY_COLUMNS)?;
        for record in records.iter() {
            writer.write_record(&[
                record.id.clone(),
                record.name.clone(),
                record.age.to_string(),
                record.sex.clone(),
                record.risk_level.clone(),
                format!("{:.1}%", record.probability * 100.0),
                record.timestamp_display(),
                record.mode.clone(),
            ])?;
        }

        writer
            .into_inner()
            .map_err(|e| HistoryError::CsvFlush(e.to_string()))
    }
}
