//! Caller-facing metric recording
//!
//! ```rust,ignore
//! use mldiag_core::{record, record_metrics};
//! use mldiag_domain::{MetricDescription, MetricType};
//!
//! record(MetricType::LearningRate, 0.001, Some(1), None, false).await?;
//!
//! record_metrics(
//!     vec![
//!         MetricDescription::new(MetricType::TfFlops, 123.4),
//!         MetricDescription::new("custom_metric", 56.7),
//!     ],
//!     false,
//!     Some(1),
//! )
//! .await?;
//! ```

use mldiag_domain::{
    IntoMetricValue, Labels, MetricDescription, MetricName, RecordingError, Result,
};

use crate::normalizer::normalize;
use crate::ports::RecordingBackend;
use crate::registry::get_active_recorder;

/// Record a single metric value using the active recorder.
///
/// # Errors
/// Returns `RecordingError::Config` if no recorder or run is active, and
/// `RecordingError::BatchWrite` if the write fails.
pub async fn record(
    metric_name: impl Into<MetricName>,
    value: impl IntoMetricValue,
    step: Option<u64>,
    labels: Option<Labels>,
    record_on_all_hosts: bool,
) -> Result<()> {
    let description = MetricDescription {
        metric_name: metric_name.into(),
        value: value.into_metric_value(),
        step,
        labels,
    };

    record_metrics(vec![description], record_on_all_hosts, None).await
}

/// Record several metrics as one batch using the active recorder.
///
/// `step` is applied to every description that does not carry its own.
///
/// # Errors
/// Same as [`record`]; additionally `RecordingError::InvalidInput` if a
/// description has an empty metric name. Nothing is written on error.
pub async fn record_metrics(
    metrics_data: Vec<MetricDescription>,
    record_on_all_hosts: bool,
    step: Option<u64>,
) -> Result<()> {
    let recorder = get_active_recorder()?;
    record_metrics_with(recorder.as_ref(), metrics_data, record_on_all_hosts, step).await
}

/// [`record_metrics`] against an explicit backend instead of the registry.
///
/// # Errors
/// See [`record_metrics`].
pub async fn record_metrics_with(
    backend: &dyn RecordingBackend,
    metrics_data: Vec<MetricDescription>,
    record_on_all_hosts: bool,
    step: Option<u64>,
) -> Result<()> {
    if let Some(index) = metrics_data.iter().position(|d| d.metric_name.is_empty()) {
        return Err(RecordingError::InvalidInput(format!(
            "metric description at index {index} has an empty metric name"
        )));
    }

    let records = normalize(metrics_data, step);
    backend.record_metrics(records, record_on_all_hosts).await
}
