use crate::record::{MetricRecord, Record};

/// Parsed records in input order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventLog(pub Vec<Record>);

impl EventLog {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First `Metric` declaration named `name`.
    pub fn find_metric(&self, name: &str) -> Option<&MetricRecord> {
        self.0.iter().find_map(|r| match r {
            Record::Metric(m) if m.name == name => Some(m),
            _ => None,
        })
    }

    /// Value of the first duration point at percentile `p`. Later points at
    /// the same percentile are ignored.
    pub fn percentile(&self, p: f64) -> Option<f64> {
        self.0.iter().find_map(|r| match r {
            Record::DurationPoint(point) if point.p == Some(p) => Some(point.value),
            _ => None,
        })
    }

    /// Value of the last failure point, or `0.0` if there is none.
    ///
    /// The failure ratio is cumulative, so the final sample supersedes the
    /// earlier ones.
    pub fn failure_rate(&self) -> f64 {
        self.0
            .iter()
            .rev()
            .find_map(|r| match r {
                Record::FailurePoint(point) => Some(point.value),
                _ => None,
            })
            .unwrap_or(0.0)
    }
}
