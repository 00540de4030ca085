//! Metric descriptions (caller input) and canonical metric records

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::metric::MetricName;
use super::value::IntoMetricValue;
use super::Labels;
use crate::constants::{LABEL_ACCELERATOR_TYPE, LABEL_HOSTNAME};

/// One metric as described by the caller
///
/// `value` is intentionally loose: shape checking happens when the log entry
/// is built so that one malformed description never blocks the rest of a
/// batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDescription {
    pub metric_name: MetricName,
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

impl MetricDescription {
    pub fn new(metric_name: impl Into<MetricName>, value: impl IntoMetricValue) -> Self {
        Self {
            metric_name: metric_name.into(),
            value: value.into_metric_value(),
            step: None,
            labels: None,
        }
    }

    pub fn with_step(mut self, step: u64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Add a single label, creating the label map on first use.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.get_or_insert_with(Labels::new).insert(key.into(), value.into());
        self
    }
}

/// Canonical metric record produced by normalization
///
/// The name is always a plain string and `step` already reflects any
/// batch-level default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub name: String,
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Labels>,
}

impl MetricRecord {
    pub fn new(name: impl Into<String>, value: impl IntoMetricValue) -> Self {
        Self { name: name.into(), value: value.into_metric_value(), step: None, labels: None }
    }

    pub fn with_step(mut self, step: u64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = Some(labels);
        self
    }

    /// `(hostname, accelerator_type)` when both reserved labels are present.
    pub fn accelerator_identity(&self) -> Option<(&str, &str)> {
        let labels = self.labels.as_ref()?;
        let hostname = labels.get(LABEL_HOSTNAME)?;
        let accelerator_type = labels.get(LABEL_ACCELERATOR_TYPE)?;
        Some((hostname.as_str(), accelerator_type.as_str()))
    }
}
