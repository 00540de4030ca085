//! Domain types and models
//!
//! Caller input flows through these types in one direction:
//! [`MetricDescription`] → [`MetricRecord`] → [`LogEntry`].

pub mod entry;
pub mod metric;
pub mod record;
pub mod run;
pub mod value;

use std::collections::BTreeMap;

pub use entry::{LogEntry, MonitoredResource, Severity};
pub use metric::{MetricName, MetricType};
pub use record::{MetricDescription, MetricRecord};
pub use run::RunContext;
pub use value::{float_sample, IntoMetricValue, MetricValue, Sample, ValueShape};

/// Free-form string labels attached to a metric.
///
/// Key order carries no meaning; a sorted map keeps output deterministic.
pub type Labels = BTreeMap<String, String>;
