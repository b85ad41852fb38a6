// Per-region aggregate metrics (response body of POST /api/latency)

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Aggregates over all records of one region. All-zero when the region has no records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RegionMetrics {
    pub avg_latency: f64,
    pub p95_latency: f64,
    pub avg_uptime: f64,
    pub breaches: u64,
}

/// Region name -> metrics, in the order regions were first requested.
pub type LatencyReport = IndexMap<String, RegionMetrics>;
