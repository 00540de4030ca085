//! Scoped write batch against a [`LogSink`]
//!
//! Appending never touches the sink. [`EntryBatch::commit`] flushes every
//! accumulated entry in one sink call; dropping the batch without committing
//! discards them, so a failure part-way through building a batch can never
//! produce a partial flush.

use mldiag_domain::{LogEntry, Result};
use tracing::debug;

use crate::ports::LogSink;

/// Open batch of log entries bound to one sink
///
/// Not shared between threads: one batch belongs to one write call.
pub struct EntryBatch<'a> {
    sink: &'a dyn LogSink,
    entries: Vec<LogEntry>,
    committed: bool,
}

impl<'a> EntryBatch<'a> {
    pub fn open(sink: &'a dyn LogSink) -> Self {
        Self { sink, entries: Vec::new(), committed: false }
    }

    pub fn with_capacity(sink: &'a dyn LogSink, capacity: usize) -> Self {
        Self { sink, entries: Vec::with_capacity(capacity), committed: false }
    }

    pub fn append(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flush all entries in a single sink call.
    ///
    /// An empty batch completes without calling the sink.
    ///
    /// # Errors
    /// Returns the sink's error unchanged; in that case nothing was written.
    pub async fn commit(mut self) -> Result<usize> {
        self.committed = true;
        let entries = std::mem::take(&mut self.entries);
        let count = entries.len();

        if count == 0 {
            debug!("Empty log entry batch, nothing to flush");
            return Ok(0);
        }

        self.sink.write_entries(entries).await?;
        Ok(count)
    }
}

impl Drop for EntryBatch<'_> {
    fn drop(&mut self) {
        if !self.committed && !self.entries.is_empty() {
            debug!(discarded = self.entries.len(), "Discarding uncommitted log entry batch");
        }
    }
}
