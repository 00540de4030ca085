use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mldiag_core::{EntryBatch, LogSink, MetricsWriter};
use mldiag_domain::{MetricRecord, RecordingError, Result, RunContext};
use tracing::{info, instrument};

use super::entry_builder::LogEntryBuilder;

/// Batch writer that turns records into structured log entries
///
/// Each call opens one [`EntryBatch`], so a batch either lands whole or not
/// at all. Every entry in a batch carries the same timestamp.
pub struct CloudLoggingWriter {
    sink: Arc<dyn LogSink>,
    builder: LogEntryBuilder,
}

impl CloudLoggingWriter {
    pub fn new(sink: Arc<dyn LogSink>, builder: LogEntryBuilder) -> Self {
        Self { sink, builder }
    }

    async fn write_batch(&self, records: &[MetricRecord], run: &RunContext) -> Result<usize> {
        let timestamp = Utc::now();
        let mut batch = EntryBatch::with_capacity(self.sink.as_ref(), records.len());

        for record in records {
            if let Some(entry) = self.builder.build(record, run, timestamp)? {
                batch.append(entry);
            }
        }

        batch.commit().await
    }
}

#[async_trait]
impl MetricsWriter for CloudLoggingWriter {
    #[instrument(skip(self, records, run), fields(records = records.len(), run_id = %run.run_id))]
    async fn write_metrics(&self, records: &[MetricRecord], run: &RunContext) -> Result<usize> {
        let count = self
            .write_batch(records, run)
            .await
            .map_err(|e| RecordingError::BatchWrite(e.to_string()))?;

        info!(count, "Successfully written metrics in batch");
        Ok(count)
    }
}
