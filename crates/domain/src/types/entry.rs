//! Structured log entries submitted to the log sink
//!
//! Serialized field names follow the Cloud Logging `LogEntry` resource
//! (`jsonPayload`, `insertId`, ...), so an entry can be posted as-is.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{
    RESOURCE_LABEL_LOCATION, RESOURCE_LABEL_NAMESPACE, RESOURCE_LABEL_NODE_ID,
    RESOURCE_LABEL_PROJECT_ID, RESOURCE_TYPE_GENERIC_NODE,
};

/// Log severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Default,
    Debug,
    #[default]
    Info,
    Notice,
    Warning,
    Error,
    Critical,
}

crate::impl_canonical_str_conversions!(Severity {
    Default => "DEFAULT",
    Debug => "DEBUG",
    Info => "INFO",
    Notice => "NOTICE",
    Warning => "WARNING",
    Error => "ERROR",
    Critical => "CRITICAL",
});

/// Resource descriptor the entry is attributed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitoredResource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub labels: BTreeMap<String, String>,
}

impl MonitoredResource {
    /// `generic_node` resource: the metric name is the namespace and the run
    /// id is the node.
    pub fn generic_node(project_id: &str, location: &str, namespace: &str, node_id: &str) -> Self {
        let labels = [
            (RESOURCE_LABEL_PROJECT_ID, project_id),
            (RESOURCE_LABEL_LOCATION, location),
            (RESOURCE_LABEL_NAMESPACE, namespace),
            (RESOURCE_LABEL_NODE_ID, node_id),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

        Self { resource_type: RESOURCE_TYPE_GENERIC_NODE.to_string(), labels }
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }
}

/// One structured entry, one per written metric record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub insert_id: String,
    pub json_payload: Map<String, Value>,
    pub severity: Severity,
    pub timestamp: DateTime<Utc>,
    pub resource: MonitoredResource,
}
