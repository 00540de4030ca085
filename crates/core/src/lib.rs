//! # MLDiag Core
//!
//! Metric recording logic - no infrastructure dependencies.
//!
//! This crate contains:
//! - The record normalizer (caller descriptions → canonical records)
//! - The metrics recorder backend and the process-wide recorder registry
//! - The caller-facing `record` / `record_metrics` entry points
//! - Port/adapter interfaces (traits) for writers, sinks and run context
//!
//! ## Architecture Principles
//! - Only depends on `mldiag-domain`
//! - No HTTP, credential or platform code
//! - All external collaborators via traits

pub mod api;
pub mod batch;
pub mod normalizer;
pub mod ports;
pub mod recorder;
pub mod registry;

// Re-export specific items to avoid ambiguity
pub use api::{record, record_metrics, record_metrics_with};
pub use batch::EntryBatch;
pub use normalizer::{normalize, normalize_one};
pub use ports::{LogSink, MetricsWriter, RecordingBackend, RunContextProvider};
pub use recorder::MetricsRecorder;
pub use registry::{clear_active_recorder, get_active_recorder, set_active_recorder};
