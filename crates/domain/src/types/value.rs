//! Metric values and their accepted shapes

use serde_json::{Number, Value};

use crate::constants::{SAMPLE_NAN, SAMPLE_NEGATIVE_INFINITY, SAMPLE_POSITIVE_INFINITY};

/// One numeric sample of a metric
///
/// JSON numbers cannot carry NaN or infinities, so those travel as the
/// protobuf JSON strings `"NaN"`, `"Infinity"` and `"-Infinity"`.
#[derive(Debug, Clone, PartialEq)]
pub enum Sample {
    Finite(Number),
    NonFinite(&'static str),
}

impl Sample {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(number) => Some(Self::Finite(number.clone())),
            Value::String(text) => non_finite_spelling(text).map(Self::NonFinite),
            _ => None,
        }
    }
}

impl From<Sample> for Value {
    fn from(sample: Sample) -> Self {
        match sample {
            Sample::Finite(number) => Value::Number(number),
            Sample::NonFinite(spelling) => Value::String(spelling.to_owned()),
        }
    }
}

fn non_finite_spelling(text: &str) -> Option<&'static str> {
    [SAMPLE_NAN, SAMPLE_POSITIVE_INFINITY, SAMPLE_NEGATIVE_INFINITY]
        .into_iter()
        .find(|spelling| *spelling == text)
}

/// Encode a float sample, keeping NaN and infinities as their string spellings.
pub fn float_sample(value: f64) -> Value {
    if value.is_nan() {
        Value::String(SAMPLE_NAN.to_owned())
    } else if value == f64::INFINITY {
        Value::String(SAMPLE_POSITIVE_INFINITY.to_owned())
    } else if value == f64::NEG_INFINITY {
        Value::String(SAMPLE_NEGATIVE_INFINITY.to_owned())
    } else {
        Value::from(value)
    }
}

/// Conversion used by every constructor that takes a caller's metric value
///
/// Unlike `Into<Value>`, floats go through [`float_sample`] so a NaN loss is
/// recorded as `"NaN"` rather than collapsing to `null`. JSON built with
/// `serde_json::json!` has already lost that information.
pub trait IntoMetricValue {
    fn into_metric_value(self) -> Value;
}

impl IntoMetricValue for Value {
    fn into_metric_value(self) -> Value {
        self
    }
}

impl IntoMetricValue for f64 {
    fn into_metric_value(self) -> Value {
        float_sample(self)
    }
}

impl IntoMetricValue for f32 {
    fn into_metric_value(self) -> Value {
        float_sample(f64::from(self))
    }
}

macro_rules! impl_into_metric_value_lossless {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoMetricValue for $ty {
                fn into_metric_value(self) -> Value {
                    Value::from(self)
                }
            }
        )*
    };
}

impl_into_metric_value_lossless!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, bool, String);

impl IntoMetricValue for &str {
    fn into_metric_value(self) -> Value {
        Value::from(self)
    }
}

impl<T: IntoMetricValue> IntoMetricValue for Vec<T> {
    fn into_metric_value(self) -> Value {
        Value::Array(self.into_iter().map(IntoMetricValue::into_metric_value).collect())
    }
}

impl<T: IntoMetricValue + Clone> IntoMetricValue for &[T] {
    fn into_metric_value(self) -> Value {
        Value::Array(self.iter().cloned().map(IntoMetricValue::into_metric_value).collect())
    }
}

/// A metric value whose shape has been checked
///
/// Caller input arrives as loosely typed JSON; only a number or a list of
/// numbers is accepted, where a non-finite spelling counts as a number. Integer and float samples keep their original
/// representation.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Scalar(Sample),
    Series(Vec<Sample>),
}

impl MetricValue {
    /// Ordered samples: a scalar becomes a one-element list.
    pub fn into_samples(self) -> Vec<Sample> {
        match self {
            Self::Scalar(sample) => vec![sample],
            Self::Series(samples) => samples,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Series(samples) => samples.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Shape of a value that cannot be recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueShape {
    Null,
    Bool,
    String,
    Object,
    /// A list with at least one non-numeric element.
    MixedList,
}

impl ValueShape {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Object => "object",
            Self::MixedList => "list with non-numeric elements",
        }
    }
}

impl std::fmt::Display for ValueShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&Value> for MetricValue {
    type Error = ValueShape;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => items
                .iter()
                .map(|item| Sample::from_value(item).ok_or(ValueShape::MixedList))
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Series),
            Value::Null => Err(ValueShape::Null),
            Value::Bool(_) => Err(ValueShape::Bool),
            Value::Number(number) => Ok(Self::Scalar(Sample::Finite(number.clone()))),
            Value::String(text) => non_finite_spelling(text)
                .map(|spelling| Self::Scalar(Sample::NonFinite(spelling)))
                .ok_or(ValueShape::String),
            Value::Object(_) => Err(ValueShape::Object),
        }
    }
}
