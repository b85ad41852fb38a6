// Domain models: telemetry samples in, per-region metrics out

mod metrics;
mod request;
mod telemetry;

pub use metrics::{LatencyReport, RegionMetrics};
pub use request::{AggregationRequest, DEFAULT_THRESHOLD_MS};
pub use telemetry::TelemetryRecord;
