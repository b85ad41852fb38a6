// HTTP handlers: version, latency aggregation

use axum::{Json, extract::State, response::IntoResponse};
use bytes::Bytes;
use tracing::{info, instrument};

use super::AppState;
use crate::aggregator;
use crate::error::ApiError;
use crate::models::{AggregationRequest, LatencyReport};

/// GET /version — service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// POST /api/latency — body is parsed as JSON regardless of Content-Type.
#[instrument(skip_all, fields(body_len = body.len()))]
pub(super) async fn latency_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LatencyReport>, ApiError> {
    let request = AggregationRequest::from_body(&body)?;
    let threshold_ms = request.threshold_or(state.config.api.default_threshold_ms);
    let dataset = state.dataset.get().await?;
    let report = aggregator::compute(&dataset, &request.regions, threshold_ms);
    info!(
        regions = request.regions.len(),
        threshold_ms,
        records = dataset.len(),
        "latency report computed"
    );
    Ok(Json(report))
}
