//! In-memory port implementations

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use mldiag_core::{MetricsWriter, RunContextProvider};
use mldiag_domain::{MetricRecord, RecordingError, Result as DomainResult, RunContext};
use parking_lot::Mutex;

/// Run context whose activity can be toggled mid-test.
pub struct FakeRun {
    pub run_id: String,
    pub location: String,
    pub designated: bool,
    active: AtomicBool,
}

impl FakeRun {
    pub fn active(run_id: &str, location: &str) -> Self {
        Self {
            run_id: run_id.to_string(),
            location: location.to_string(),
            designated: true,
            active: AtomicBool::new(true),
        }
    }

    pub fn on_worker_host(mut self) -> Self {
        self.designated = false;
        self
    }

    pub fn end(&self) {
        self.active.store(false, Ordering::SeqCst);
    }
}

impl RunContextProvider for FakeRun {
    fn current_run_id(&self) -> String {
        self.run_id.clone()
    }

    fn current_location(&self) -> String {
        self.location.clone()
    }

    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    fn is_designated_host(&self) -> bool {
        self.designated
    }
}

/// Writer that keeps every batch it receives.
#[derive(Default)]
pub struct MemoryWriter {
    batches: Mutex<Vec<(Vec<MetricRecord>, RunContext)>>,
    fail_with: Mutex<Option<String>>,
}

impl MemoryWriter {
    pub fn fail_with(&self, message: &str) {
        *self.fail_with.lock() = Some(message.to_string());
    }

    pub fn batches(&self) -> Vec<(Vec<MetricRecord>, RunContext)> {
        self.batches.lock().clone()
    }
}

#[async_trait]
impl MetricsWriter for MemoryWriter {
    async fn write_metrics(
        &self,
        records: &[MetricRecord],
        run: &RunContext,
    ) -> DomainResult<usize> {
        if let Some(message) = self.fail_with.lock().clone() {
            return Err(RecordingError::BatchWrite(message));
        }
        self.batches.lock().push((records.to_vec(), run.clone()));
        Ok(records.len())
    }
}
