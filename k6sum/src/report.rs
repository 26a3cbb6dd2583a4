use std::fmt;

/// Rendered in place of the latency when no percentile point was found.
pub const MISSING: &str = "n/a";

/// The figures printed for one run.
///
/// Renders as three markdown lines without a trailing newline:
///
/// ```text
/// ### k6 Summary
/// - p95 (ms): 242
/// - error rate: 1.20%
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub tool: String,
    pub percentile: f64,
    /// Already rounded with [`round_ms`].
    pub latency_ms: Option<i64>,
    /// Fraction in `[0, 1]`.
    pub error_rate: f64,
}

impl Summary {
    pub fn new(tool: impl Into<String>, percentile: f64, latency_ms: Option<f64>, error_rate: f64) -> Self {
        Self {
            tool: tool.into(),
            percentile,
            latency_ms: latency_ms.map(round_ms),
            error_rate,
        }
    }
}

/// Round to the nearest millisecond, halves away from zero (`123.5` -> `124`).
pub fn round_ms(ms: f64) -> i64 {
    ms.round() as i64
}

/// Render a fraction as a percentage with exactly two decimals, without the `%`.
pub fn format_percentage(fraction: f64) -> String {
    format!("{:.2}", fraction * 100.0)
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {} Summary", self.tool)?;
        match self.latency_ms {
            Some(ms) => writeln!(f, "- p{} (ms): {}", self.percentile, ms)?,
            None => writeln!(f, "- p{} (ms): {}", self.percentile, MISSING)?,
        }
        write!(f, "- error rate: {}%", format_percentage(self.error_rate))
    }
}
