// Shared test helpers

use latency_api::models::TelemetryRecord;

pub fn record(region: &str, latency_ms: f64, uptime_pct: f64) -> TelemetryRecord {
    TelemetryRecord::new(region, latency_ms, uptime_pct)
}

/// Two us-east samples plus one eu-west sample.
pub fn sample_dataset() -> Vec<TelemetryRecord> {
    vec![
        record("us-east", 100.0, 99.9),
        record("eu-west", 250.0, 98.0),
        record("us-east", 200.0, 99.5),
    ]
}
