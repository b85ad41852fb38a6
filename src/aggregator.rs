// Per-region latency/uptime aggregation. Pure: no I/O, no shared state.

use std::collections::HashMap;

use crate::models::{LatencyReport, RegionMetrics, TelemetryRecord};

/// Rank used for the p95 latency (0.0..=100.0).
pub const P95: f64 = 95.0;

/// Computes metrics for every requested region.
/// Keys keep the order of first appearance in `regions`; duplicates collapse to one entry.
/// Regions with no records get the all-zero metrics.
pub fn compute(
    dataset: &[TelemetryRecord],
    regions: &[String],
    threshold_ms: f64,
) -> LatencyReport {
    let mut report = LatencyReport::with_capacity(regions.len());
    if regions.is_empty() {
        return report;
    }

    let by_region = group_by_region(dataset);
    for region in regions {
        let metrics = by_region
            .get(region.as_str())
            .map(|records| region_metrics(records, threshold_ms))
            .unwrap_or_default();
        report.insert(region.clone(), metrics);
    }
    report
}

/// One O(n) pass; each region's records stay in dataset order.
fn group_by_region(dataset: &[TelemetryRecord]) -> HashMap<&str, Vec<&TelemetryRecord>> {
    let mut by_region: HashMap<&str, Vec<&TelemetryRecord>> = HashMap::new();
    for r in dataset {
        by_region.entry(r.region.as_str()).or_default().push(r);
    }
    by_region
}

/// Metrics over one region's records. Empty input yields the zero metrics.
pub fn region_metrics(records: &[&TelemetryRecord], threshold_ms: f64) -> RegionMetrics {
    if records.is_empty() {
        return RegionMetrics::default();
    }

    let latencies: Vec<f64> = records.iter().map(|r| r.latency_ms).collect();
    let uptimes: Vec<f64> = records.iter().map(|r| r.uptime_pct).collect();
    let breaches = latencies.iter().filter(|&&l| l > threshold_ms).count() as u64;

    RegionMetrics {
        avg_latency: round2(mean_f64(&latencies)),
        p95_latency: round2(percentile(&latencies, P95)),
        avg_uptime: round2(mean_f64(&uptimes)),
        breaches,
    }
}

/// Linear interpolation between order statistics at rank `p/100 * (n - 1)`.
/// Empty input yields 0.
pub fn percentile(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    sorted[lo] + (rank - lo as f64) * (sorted[hi] - sorted[lo])
}

/// Above this magnitude an f64 carries no hundredths, and `x * 100` may overflow.
const ROUND2_LIMIT: f64 = 4_503_599_627_370_496.0 / 100.0; // 2^52 / 100

/// Rounds to 2 decimals, ties away from zero. Values too large to carry
/// hundredths are returned unchanged.
pub fn round2(x: f64) -> f64 {
    if x.abs() >= ROUND2_LIMIT {
        return x;
    }
    (x * 100.0).round() / 100.0
}

fn mean_f64(v: &[f64]) -> f64 {
    if v.is_empty() {
        return 0.0;
    }
    v.iter().sum::<f64>() / (v.len() as f64)
}
