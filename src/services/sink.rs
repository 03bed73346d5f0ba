//! Destinations for finished transaction records
//!
//! The composer hands every successfully submitted record to a [`RecordSink`].
//! Nothing is persisted: the default sink only logs the record.

use crate::models::TransactionRecord;

/// Receives records assembled by the draft composer
pub trait RecordSink {
    /// Accept one finished record
    fn emit(&mut self, record: &TransactionRecord);
}

/// Logs each record through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl RecordSink for LogSink {
    fn emit(&mut self, record: &TransactionRecord) {
        log_record(record);
    }
}

/// Logs each record and keeps it for the rest of the session
#[derive(Debug, Default, Clone)]
pub struct SessionSink {
    records: Vec<TransactionRecord>,
}

impl SessionSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records emitted so far, oldest first
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordSink for SessionSink {
    fn emit(&mut self, record: &TransactionRecord) {
        log_record(record);
        self.records.push(record.clone());
    }
}

fn log_record(record: &TransactionRecord) {
    match serde_json::to_string(record) {
        Ok(json) => tracing::info!(record = %json, "transaction registered"),
        Err(e) => tracing::warn!(error = %e, "transaction registered but could not be serialized"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;

    fn record(name: &str) -> TransactionRecord {
        TransactionRecord {
            name: name.into(),
            amount: 10.0,
            transaction_type: TransactionType::Debit,
            category: "food".into(),
        }
    }

    #[test]
    fn test_session_sink_keeps_records_in_order() {
        let mut sink = SessionSink::new();
        assert!(sink.is_empty());

        sink.emit(&record("Lunch"));
        sink.emit(&record("Dinner"));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.records()[0].name, "Lunch");
        assert_eq!(sink.records()[1].name, "Dinner");
    }

    #[test]
    fn test_log_sink_accepts_records() {
        let mut sink = LogSink;
        sink.emit(&record("Lunch"));
    }
}
