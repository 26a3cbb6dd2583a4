use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Trend metric carrying request latency samples and percentile points.
pub const DURATION_METRIC: &str = "http_req_duration";
/// Rate metric carrying the running fraction of failed requests.
pub const FAILURE_METRIC: &str = "http_req_failed";

/// Process exit code for an unreadable input file.
pub const EXIT_FILE_ACCESS: i32 = 1;
/// Process exit code for a malformed input line. `2` is left to clap usage errors.
pub const EXIT_PARSE: i32 = 3;

/// Error types for summarizer operations
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryError {
    #[error("Cannot read {path}: {reason}")]
    FileAccess { path: String, reason: String },

    #[error("Malformed record on line {line}: {reason}: {content}")]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },
}

impl SummaryError {
    pub fn exit_code(&self) -> i32 {
        match self {
            SummaryError::FileAccess { .. } => EXIT_FILE_ACCESS,
            SummaryError::Parse { .. } => EXIT_PARSE,
        }
    }
}

/// Result type for summarizer operations
pub type Result<T> = std::result::Result<T, SummaryError>;
