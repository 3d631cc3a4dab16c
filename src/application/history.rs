//! History service: Summary metrics and export over stored assessments.

use std::sync::Arc;

use crate::adapters::HistoryError;
use crate::domain::{HistoryRecord, HistorySummary};
use crate::ports::HistoryStore;

/// Service surfacing the assessment history.
pub struct HistoryService<H>
where
    H: HistoryStore,
{
    history: Arc<H>,
}

impl<H> HistoryService<H>
where
    H: HistoryStore,
    H::Error: Into<HistoryError>,
{
    /// Create a new history service.
    pub fn new(history: Arc<H>) -> Self {
        Self { history }
    }

    /// All records, newest first.
    ///
    /// # Errors
    /// Returns error if the store cannot be accessed.
    pub fn recent(&self) -> crate::Result<Vec<HistoryRecord>> {
        let mut records = self
            .history
            .records()
            .map_err(|e| crate::CardioError::History(e.into()))?;
        records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(records)
    }

    /// Aggregate metrics over the stored history.
    ///
    /// # Errors
    /// Returns error if the store cannot be accessed.
    pub fn summary(&self) -> crate::Result<HistorySummary> {
        let summary = self
            .history
            .summarize()
            .map_err(|e| crate::CardioError::History(e.into()))?;

        tracing::info!(
            "History summary: {} assessments, {} high risk, average probability {:.1}%",
            summary.count,
            summary.high_risk_count,
            summary.average_probability * 100.0
        );

        Ok(summary)
    }

    /// CSV export of the full history.
    ///
    /// # Errors
    /// Returns error if the store cannot be accessed or serialization fails.
    pub fn export_csv(&self) -> crate::Result<Vec<u8>> {
        self.history
            .export_csv()
            .map_err(|e| crate::CardioError::History(e.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryHistory;
    use chrono::{TimeZone, Utc};

    fn record_at(minute: u32, risk_level: &str, probability: f64) -> HistoryRecord {
        HistoryRecord {
            id: format!("P-{minute}"),
            name: "Jane Doe".to_string(),
            age: 52,
            sex: "Female".to_string(),
            risk_level: risk_level.to_string(),
            probability,
            timestamp: Utc.with_ymd_and_hms(2025, 6, 1, 10, minute, 0).unwrap(),
            mode: "Heart Disease".to_string(),
        }
    }

    fn service_with(records: Vec<HistoryRecord>) -> HistoryService<InMemoryHistory> {
        let store = Arc::new(InMemoryHistory::new());
        for record in records {
            store.record(record).unwrap();
        }
        HistoryService::new(store)
    }

    #[test]
    fn test_recent_is_newest_first() {
        let service = service_with(vec![
            record_at(5, "Low", 0.2),
            record_at(20, "High", 0.8),
            record_at(10, "Low", 0.3),
        ]);

        let records = service.recent().expect("recent");
        assert_eq!(records[0].id, "P-20");
        assert_eq!(records[1].id, "P-10");
        assert_eq!(records[2].id, "P-5");
    }

    #[test]
    fn test_summary_passthrough() {
        let service = service_with(vec![record_at(1, "High", 0.9), record_at(2, "Low", 0.1)]);
        let summary = service.summary().expect("summary");
        assert_eq!(summary.count, 2);
        assert_eq!(summary.high_risk_count, 1);
        assert_eq!(summary.low_risk_count, 1);
        assert!((summary.average_probability - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_export_empty_store() {
        let service = service_with(Vec::new());
        let csv = String::from_utf8(service.export_csv().expect("export")).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }
}
