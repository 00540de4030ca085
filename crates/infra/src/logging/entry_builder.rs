//! Record → structured log entry conversion
//!
//! Payload layout (field names are consumed by downstream ingestion):
//!
//! ```text
//! {
//!   "values": [..],                  // always present
//!   "accelerator_labels": [..],      // hostname + accelerator_type labels only
//!   "step_index": n,                 // when the record has a step
//!   "<label key>": "<label value>",  // every label, flattened, merged last
//! }
//! ```

use chrono::{DateTime, Utc};
use mldiag_domain::constants::{PAYLOAD_ACCELERATOR_LABELS, PAYLOAD_STEP_INDEX, PAYLOAD_VALUES};
use mldiag_domain::{
    LogEntry, MetricRecord, MetricValue, MonitoredResource, RecordingError, Result, RunContext,
    Severity, ValueShapePolicy,
};
use serde_json::{Map, Value};
use tracing::warn;
use uuid::Uuid;

/// Builds one [`LogEntry`] per metric record
#[derive(Debug, Clone)]
pub struct LogEntryBuilder {
    project_id: String,
    policy: ValueShapePolicy,
}

impl LogEntryBuilder {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self { project_id: project_id.into(), policy: ValueShapePolicy::default() }
    }

    pub fn with_policy(mut self, policy: ValueShapePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build the entry for `record`.
    ///
    /// Returns `Ok(None)` when the value is not a number or a list of
    /// numbers and the policy is lenient.
    ///
    /// # Errors
    /// Returns `RecordingError::UnsupportedValueShape` for such a value
    /// under the strict policy.
    pub fn build(
        &self,
        record: &MetricRecord,
        run: &RunContext,
        timestamp: DateTime<Utc>,
    ) -> Result<Option<LogEntry>> {
        let samples = match MetricValue::try_from(&record.value) {
            Ok(value) => value.into_samples(),
            Err(shape) => match self.policy {
                ValueShapePolicy::Lenient => {
                    warn!(
                        metric = %record.name,
                        shape = %shape,
                        "Skipping metric due to unsupported value type"
                    );
                    return Ok(None);
                }
                ValueShapePolicy::Strict => {
                    return Err(RecordingError::UnsupportedValueShape(format!(
                        "metric '{}' has a {} value",
                        record.name, shape
                    )));
                }
            },
        };

        let resource = MonitoredResource::generic_node(
            &self.project_id,
            &run.location,
            &record.name,
            &run.run_id,
        );

        let sample_count = samples.len();
        let mut payload = Map::new();
        payload.insert(PAYLOAD_VALUES.to_string(), Value::from(samples));

        if let Some((hostname, accelerator_type)) = record.accelerator_identity() {
            let accelerator_labels: Vec<Value> = (0..sample_count)
                .map(|index| Value::String(format!("{hostname}-{accelerator_type}{index}")))
                .collect();
            payload.insert(PAYLOAD_ACCELERATOR_LABELS.to_string(), Value::Array(accelerator_labels));
        }

        if let Some(step) = record.step {
            payload.insert(PAYLOAD_STEP_INDEX.to_string(), Value::from(step));
        }

        // Labels go in last and win on key collisions.
        if let Some(labels) = &record.labels {
            for (key, value) in labels {
                payload.insert(key.clone(), Value::String(value.clone()));
            }
        }

        Ok(Some(LogEntry {
            insert_id: Uuid::new_v4().to_string(),
            json_payload: payload,
            severity: Severity::Info,
            timestamp,
            resource,
        }))
    }
}
