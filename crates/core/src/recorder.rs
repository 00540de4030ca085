//! Metrics recorder - the default recording backend

use std::sync::Arc;

use async_trait::async_trait;
use mldiag_domain::{MetricRecord, RecordingError, Result, RunContext};
use tracing::{debug, instrument};

use crate::ports::{MetricsWriter, RecordingBackend, RunContextProvider};

/// Recording backend bound to one run
///
/// Resolves run identity per call, applies host gating, then hands the batch
/// to the configured writer. The writer itself is host-agnostic.
pub struct MetricsRecorder {
    run_context: Arc<dyn RunContextProvider>,
    writer: Arc<dyn MetricsWriter>,
}

impl MetricsRecorder {
    pub fn new(run_context: Arc<dyn RunContextProvider>, writer: Arc<dyn MetricsWriter>) -> Self {
        Self { run_context, writer }
    }

    fn current_run(&self) -> Result<RunContext> {
        if !self.run_context.is_active() {
            return Err(RecordingError::Config(
                "No active run; start a run before recording metrics".into(),
            ));
        }

        Ok(RunContext::new(self.run_context.current_run_id(), self.run_context.current_location()))
    }
}

#[async_trait]
impl RecordingBackend for MetricsRecorder {
    #[instrument(skip(self, records), fields(count = records.len()))]
    async fn record_metrics(
        &self,
        records: Vec<MetricRecord>,
        record_on_all_hosts: bool,
    ) -> Result<()> {
        let run = self.current_run()?;

        if !record_on_all_hosts && !self.run_context.is_designated_host() {
            debug!("Not the designated host, skipping metrics batch");
            return Ok(());
        }

        let written = self.writer.write_metrics(&records, &run).await?;
        debug!(written, run_id = %run.run_id, "Recorded metrics batch");
        Ok(())
    }
}
