//! Metric naming: well-known metric types and free-form custom names

use serde::{Deserialize, Serialize};

/// Well-known training metrics with stable canonical names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    StepTime,
    Loss,
    LearningRate,
    #[serde(rename = "tflops")]
    TfFlops,
    Mfu,
    Throughput,
    TokensPerSecond,
    GradientNorm,
    MemoryUsage,
}

crate::impl_canonical_str_conversions!(MetricType {
    StepTime => "step_time",
    Loss => "loss",
    LearningRate => "learning_rate",
    TfFlops => "tflops",
    Mfu => "mfu",
    Throughput => "throughput",
    TokensPerSecond => "tokens_per_second",
    GradientNorm => "gradient_norm",
    MemoryUsage => "memory_usage",
});

impl MetricType {
    /// Every well-known metric type, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::StepTime,
        Self::Loss,
        Self::LearningRate,
        Self::TfFlops,
        Self::Mfu,
        Self::Throughput,
        Self::TokensPerSecond,
        Self::GradientNorm,
        Self::MemoryUsage,
    ];
}

/// Name of a metric as supplied by the caller
///
/// Either one of the well-known [`MetricType`]s or an arbitrary custom name.
/// Both collapse to a plain string at normalization time.
///
/// On the wire a name is always a plain string; deserialization produces
/// [`MetricName::Custom`], which canonicalizes to the same string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MetricName {
    Known(MetricType),
    Custom(String),
}

impl MetricName {
    /// Borrow the canonical string without allocating.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(metric_type) => metric_type.as_str(),
            Self::Custom(name) => name,
        }
    }

    pub fn to_canonical_string(&self) -> String {
        self.as_str().to_string()
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl std::fmt::Display for MetricName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<MetricType> for MetricName {
    fn from(value: MetricType) -> Self {
        Self::Known(value)
    }
}

impl From<String> for MetricName {
    fn from(value: String) -> Self {
        Self::Custom(value)
    }
}

impl From<&str> for MetricName {
    fn from(value: &str) -> Self {
        Self::Custom(value.to_string())
    }
}

impl From<MetricName> for String {
    fn from(value: MetricName) -> Self {
        match value {
            MetricName::Known(metric_type) => metric_type.as_str().to_string(),
            MetricName::Custom(name) => name,
        }
    }
}
