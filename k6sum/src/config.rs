/// Load-generation tool named in the report heading.
pub const TOOL_NAME: &str = "k6";

/// Percentile reported when none is configured.
pub const DEFAULT_PERCENTILE: f64 = 95.0;

/// Log filter used when `RUST_LOG` is unset. Keeps stderr quiet on success.
pub const DEFAULT_LOG_FILTER: &str = "k6sum=warn";

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryConfig {
    pub tool: String,
    pub percentile: f64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            tool: TOOL_NAME.to_string(),
            percentile: DEFAULT_PERCENTILE,
        }
    }
}
