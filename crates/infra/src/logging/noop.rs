use async_trait::async_trait;
use mldiag_core::MetricsWriter;
use mldiag_domain::{MetricRecord, Result, RunContext};
use tracing::debug;

/// Writer used when metrics capture is disabled
///
/// Accepts anything the real writer accepts and never fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpMetricsWriter;

impl NoOpMetricsWriter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MetricsWriter for NoOpMetricsWriter {
    async fn write_metric(&self, _record: MetricRecord, _run: &RunContext) -> Result<usize> {
        Ok(0)
    }

    async fn write_metrics(&self, records: &[MetricRecord], _run: &RunContext) -> Result<usize> {
        debug!(records = records.len(), "Metrics capture disabled, dropping batch");
        Ok(0)
    }
}
