use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use mldiag_core::LogSink;
use mldiag_domain::{LogEntry, RecordingError, Result};
use parking_lot::Mutex;

/// Process-local sink that keeps every flushed entry
///
/// Useful for dry runs and for exercising the pipeline without a network.
/// A failure armed with [`InMemoryLogSink::fail_with`] rejects every
/// following flush as a unit.
#[derive(Debug, Default)]
pub struct InMemoryLogSink {
    entries: Mutex<Vec<LogEntry>>,
    write_calls: AtomicUsize,
    failure: Mutex<Option<RecordingError>>,
}

impl InMemoryLogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent flush fail with `error`.
    pub fn fail_with(&self, error: RecordingError) {
        *self.failure.lock() = Some(error);
    }

    /// Snapshot of all persisted entries, in flush order.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Number of flushes attempted, failed ones included.
    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LogSink for InMemoryLogSink {
    async fn write_entries(&self, entries: Vec<LogEntry>) -> Result<()> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(error) = self.failure.lock().clone() {
            return Err(error);
        }

        self.entries.lock().extend(entries);
        Ok(())
    }
}
