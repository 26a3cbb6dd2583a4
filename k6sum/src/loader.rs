use std::fs;
use std::path::Path;

use k6sum_common::{Result, SummaryError};
use serde_json::Value;
use tracing::debug;

use crate::extract::EventLog;
use crate::record::Record;

/// Read `path` and parse it with [`parse_events`].
pub fn load_events(path: impl AsRef<Path>) -> Result<EventLog> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| SummaryError::FileAccess {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read event file");
    parse_events(&text)
}

/// Parse newline-delimited JSON records, skipping blank lines.
///
/// Every remaining line must be a JSON object. The first line that isn't
/// fails the whole parse; nothing is returned for the lines before it.
pub fn parse_events(text: &str) -> Result<EventLog> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_line(idx + 1, line)?);
    }
    debug!(records = records.len(), "parsed event stream");
    Ok(EventLog(records))
}

fn parse_line(line_no: usize, line: &str) -> Result<Record> {
    let malformed = |reason: String| SummaryError::Parse {
        line: line_no,
        content: line.to_string(),
        reason,
    };

    let value: Value = serde_json::from_str(line).map_err(|e| malformed(e.to_string()))?;
    if !value.is_object() {
        return Err(malformed("expected a JSON object".to_string()));
    }

    let record = Record::from_value(value);
    if let Record::Unknown(unknown) = &record {
        debug!(line = line_no, kind = unknown.kind().unwrap_or("<none>"), "ignoring unrecognized record");
    }
    Ok(record)
}
