// Telemetry dataset: a static JSON array of records, read-only for the process lifetime.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::models::TelemetryRecord;

/// Shared, immutable record set.
pub type Dataset = Arc<[TelemetryRecord]>;

/// Parses the dataset file contents. Fails on the first record missing a field
/// or carrying a field of the wrong type.
pub fn parse_dataset(bytes: &[u8]) -> Result<Vec<TelemetryRecord>, ApiError> {
    let value: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|e| ApiError::DatasetUnavailable(format!("invalid JSON: {}", e)))?;
    let serde_json::Value::Array(items) = value else {
        return Err(ApiError::DatasetUnavailable(
            "top-level value must be an array of records".into(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| ApiError::MalformedRecord {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

#[instrument(skip(path), fields(path = %path.display()))]
pub async fn load_dataset(path: &Path) -> Result<Dataset, ApiError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ApiError::DatasetUnavailable(format!("{}: {}", path.display(), e)))?;
    let records = parse_dataset(&bytes)?;
    info!(records = records.len(), "dataset loaded");
    Ok(records.into())
}

/// Hands out the dataset per request: either re-read from disk every time, or
/// loaded once on first use and shared. A failed load is not cached.
pub struct DatasetStore {
    path: PathBuf,
    reload_per_request: bool,
    cached: OnceCell<Dataset>,
}

impl DatasetStore {
    pub fn new(path: impl Into<PathBuf>, reload_per_request: bool) -> Self {
        Self {
            path: path.into(),
            reload_per_request,
            cached: OnceCell::new(),
        }
    }

    /// Store backed by records already in memory (never touches disk).
    pub fn from_records(records: Vec<TelemetryRecord>) -> Self {
        Self {
            path: PathBuf::new(),
            reload_per_request: false,
            cached: OnceCell::from(Dataset::from(records)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn get(&self) -> Result<Dataset, ApiError> {
        if self.reload_per_request {
            return load_dataset(&self.path).await;
        }
        self.cached
            .get_or_try_init(|| load_dataset(&self.path))
            .await
            .cloned()
    }
}
