use k6sum::extract::EventLog;
use k6sum::record::{DurationPoint, FailurePoint, MetricRecord, Record};
use serde_json::json;

fn metric(name: &str) -> Record {
    Record::Metric(MetricRecord { name: name.to_string() })
}

fn duration(p: Option<f64>, value: f64) -> Record {
    Record::DurationPoint(DurationPoint { value, p })
}

fn failed(value: f64) -> Record {
    Record::FailurePoint(FailurePoint { value })
}

fn unknown() -> Record {
    Record::from_value(json!({"type": "Point", "metric": "vus", "data": {"value": 5}}))
}

// --- find_metric ---

#[test]
fn test_find_metric_returns_declaration() {
    let log = EventLog(vec![metric("vus"), unknown(), metric("http_req_duration")]);
    assert_eq!(log.find_metric("http_req_duration"), Some(&MetricRecord { name: "http_req_duration".to_string() }));
    assert_eq!(log.find_metric("vus").map(|m| m.name.as_str()), Some("vus"));
}

#[test]
fn test_find_metric_miss() {
    let log = EventLog(vec![metric("vus"), duration(Some(95.0), 1.0)]);
    assert!(log.find_metric("http_req_duration").is_none());
    assert!(EventLog::default().find_metric("http_req_duration").is_none());
}

// --- percentile ---

#[test]
fn test_percentile_first_match_wins() {
    let log = EventLog(vec![
        duration(Some(95.0), 200.0),
        duration(Some(95.0), 900.0),
        duration(Some(95.0), 50.0),
    ]);
    assert_eq!(log.percentile(95.0), Some(200.0));
}

#[test]
fn test_percentile_ignores_other_percentiles_and_plain_samples() {
    let log = EventLog(vec![
        duration(None, 1.0),
        duration(Some(90.0), 150.0),
        unknown(),
        duration(Some(95.0), 241.7),
        duration(Some(99.0), 400.0),
    ]);
    assert_eq!(log.percentile(95.0), Some(241.7));
    assert_eq!(log.percentile(99.0), Some(400.0));
    assert_eq!(log.percentile(50.0), None);
}

#[test]
fn test_percentile_miss_on_empty_log() {
    assert_eq!(EventLog::default().percentile(95.0), None);
}

// --- failure_rate ---

#[test]
fn test_failure_rate_last_match_wins() {
    // Neither the first nor the maximum.
    let log = EventLog(vec![failed(0.01), failed(0.2), failed(0.05)]);
    assert_eq!(log.failure_rate(), 0.05);
}

#[test]
fn test_failure_rate_skips_trailing_other_records() {
    let log = EventLog(vec![failed(0.3), failed(0.1), duration(Some(95.0), 1.0), unknown()]);
    assert_eq!(log.failure_rate(), 0.1);
}

#[test]
fn test_failure_rate_defaults_to_zero() {
    let log = EventLog(vec![metric("http_req_failed"), duration(Some(95.0), 1.0)]);
    assert_eq!(log.failure_rate(), 0.0);
    assert_eq!(EventLog::default().failure_rate(), 0.0);
}
