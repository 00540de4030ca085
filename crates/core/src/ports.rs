//! Port interfaces for metric recording
//!
//! Adapters in `mldiag-infra` implement these traits; the core only talks to
//! them through `Arc<dyn ...>`.

use std::slice;

use async_trait::async_trait;
use mldiag_domain::{LogEntry, MetricRecord, Result, RunContext};

/// Writes canonical records to a log sink
///
/// Both operations are all-or-nothing: either every buildable record lands
/// or an error is returned and nothing does.
#[async_trait]
pub trait MetricsWriter: Send + Sync {
    /// Write a single record as a one-element batch.
    ///
    /// Returns the number of entries written (0 or 1).
    async fn write_metric(&self, record: MetricRecord, run: &RunContext) -> Result<usize> {
        self.write_metrics(slice::from_ref(&record), run).await
    }

    /// Write a batch of records atomically.
    ///
    /// Returns the number of entries written. Records skipped for an
    /// unsupported value shape are not counted.
    async fn write_metrics(&self, records: &[MetricRecord], run: &RunContext) -> Result<usize>;
}

/// Active recording backend resolved by the caller-facing entry points
#[async_trait]
pub trait RecordingBackend: Send + Sync {
    async fn record_metrics(
        &self,
        records: Vec<MetricRecord>,
        record_on_all_hosts: bool,
    ) -> Result<()>;
}

/// Run identity and host role, supplied by the run-context collaborator
pub trait RunContextProvider: Send + Sync {
    fn current_run_id(&self) -> String;

    fn current_location(&self) -> String;

    fn is_active(&self) -> bool;

    /// Whether this host emits records that are not flagged for all hosts.
    ///
    /// Exactly one host per run should return true.
    fn is_designated_host(&self) -> bool {
        true
    }
}

/// Destination for structured log entries
///
/// One call carries one whole batch; the sink must accept or reject it as a
/// unit.
#[async_trait]
pub trait LogSink: Send + Sync {
    async fn write_entries(&self, entries: Vec<LogEntry>) -> Result<()>;
}
