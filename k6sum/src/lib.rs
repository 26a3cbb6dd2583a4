pub mod config;
pub mod extract;
pub mod loader;
pub mod logging;
pub mod record;
pub mod report;

use std::path::Path;

use k6sum_common::{Result, DURATION_METRIC};
use tracing::{debug, warn};

use crate::config::SummaryConfig;
use crate::loader::load_events;
use crate::report::Summary;

/// Load the event file at `path` and reduce it to a [`Summary`].
///
/// Fails only when the file can't be read or a line isn't a JSON object.
/// Missing metrics are reported as `n/a` latency or a zero error rate.
pub fn summarize(path: impl AsRef<Path>, config: &SummaryConfig) -> Result<Summary> {
    let events = load_events(path)?;

    if events.find_metric(DURATION_METRIC).is_none() {
        warn!(metric = DURATION_METRIC, "metric not declared in event stream");
    }

    let latency = events.percentile(config.percentile);
    if latency.is_none() {
        warn!(percentile = config.percentile, "no percentile point found");
    }

    let error_rate = events.failure_rate();
    debug!(records = events.len(), ?latency, error_rate, "extracted metrics");

    Ok(Summary::new(config.tool.clone(), config.percentile, latency, error_rate))
}
