// One telemetry sample as stored in the dataset file

use serde::{Deserialize, Serialize};

/// One measurement sample. Fields beyond these three are ignored when parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    pub region: String,
    pub latency_ms: f64,
    pub uptime_pct: f64,
}

impl TelemetryRecord {
    pub fn new(region: impl Into<String>, latency_ms: f64, uptime_pct: f64) -> Self {
        Self {
            region: region.into(),
            latency_ms,
            uptime_pct,
        }
    }
}
