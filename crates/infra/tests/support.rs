//! Shared helpers for `mldiag-infra` integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use mldiag_core::{set_active_recorder, MetricsRecorder};
use mldiag_domain::{LogEntry, MetricsConfig};
use mldiag_infra::{CloudLoggingWriter, InMemoryLogSink, LogEntryBuilder, StaticRunContext};
use once_cell::sync::Lazy;
use serde_json::Value;
use tokio::sync::Mutex;
use wiremock::MockServer;

pub const WRITE_PATH: &str = "/v2/entries:write";
pub const TEST_PROJECT: &str = "test-project";

/// Serializes tests that install a process-wide recorder.
pub static REGISTRY_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

/// Route `tracing` output through the test harness.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().with_env_filter("debug").try_init();
}

/// Enabled configuration pointing at a mock Cloud Logging server.
pub fn mock_config(server: &MockServer) -> MetricsConfig {
    MetricsConfig {
        endpoint: format!("{}{}", server.uri(), WRITE_PATH),
        timeout_seconds: 5,
        ..MetricsConfig::new(TEST_PROJECT)
    }
}

/// Install a recorder that writes into an in-memory sink.
pub fn install_memory_recorder(run: Arc<StaticRunContext>) -> Arc<InMemoryLogSink> {
    let sink = Arc::new(InMemoryLogSink::new());
    let writer = CloudLoggingWriter::new(sink.clone(), LogEntryBuilder::new(TEST_PROJECT));
    set_active_recorder(Arc::new(MetricsRecorder::new(run, Arc::new(writer))));
    sink
}

pub fn payload(entry: &LogEntry) -> Value {
    Value::Object(entry.json_payload.clone())
}

/// Bodies of every request the mock server received, parsed as JSON.
pub async fn received_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| serde_json::from_slice(&request.body).expect("request body should be JSON"))
        .collect()
}
