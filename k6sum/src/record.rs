use k6sum_common::{DURATION_METRIC, FAILURE_METRIC};
use serde::Deserialize;
use serde_json::Value;

/// A `"Metric"` declaration. Only the name is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    pub name: String,
}

/// A `"Point"` sample of [`DURATION_METRIC`]. `p` is set on percentile points.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationPoint {
    pub value: f64,
    pub p: Option<f64>,
}

/// A `"Point"` sample of [`FAILURE_METRIC`]: the failure ratio at that moment.
#[derive(Debug, Clone, PartialEq)]
pub struct FailurePoint {
    pub value: f64,
}

/// Any object that matches none of the known shapes, kept verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownRecord {
    pub raw: Value,
}

impl UnknownRecord {
    /// The `type` discriminator, if the object has a string one.
    pub fn kind(&self) -> Option<&str> {
        self.raw.get("type").and_then(Value::as_str)
    }
}

/// One line of the event stream.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Metric(MetricRecord),
    DurationPoint(DurationPoint),
    FailurePoint(FailurePoint),
    Unknown(UnknownRecord),
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Envelope {
    Metric { data: MetricData },
    Point { metric: String, data: PointData },
}

#[derive(Deserialize)]
struct MetricData {
    name: String,
}

#[derive(Deserialize)]
struct PointData {
    value: f64,
    #[serde(default)]
    p: Option<f64>,
}

impl Record {
    /// Classify a parsed JSON value. Shapes that don't fit a known variant
    /// (unknown `type`, other metrics, missing or non-numeric fields) become
    /// [`Record::Unknown`] rather than an error.
    pub fn from_value(value: Value) -> Record {
        match Envelope::deserialize(&value) {
            Ok(Envelope::Metric { data }) => Record::Metric(MetricRecord { name: data.name }),
            Ok(Envelope::Point { metric, data }) if metric == DURATION_METRIC => {
                Record::DurationPoint(DurationPoint { value: data.value, p: data.p })
            }
            Ok(Envelope::Point { metric, data }) if metric == FAILURE_METRIC => {
                Record::FailurePoint(FailurePoint { value: data.value })
            }
            _ => Record::Unknown(UnknownRecord { raw: value }),
        }
    }
}
