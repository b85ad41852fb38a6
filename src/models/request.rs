// POST /api/latency request body

use serde::Deserialize;

/// Breach threshold used when the request omits `threshold_ms` and config does not override it.
pub const DEFAULT_THRESHOLD_MS: f64 = 180.0;

/// Both fields are optional; `null` is treated the same as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AggregationRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub regions: Vec<String>,
    #[serde(default)]
    pub threshold_ms: Option<f64>,
}

impl AggregationRequest {
    /// Parse a raw body. Empty or whitespace-only bodies mean "all defaults".
    pub fn from_body(body: &[u8]) -> Result<Self, serde_json::Error> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
    }

    pub fn threshold_or(&self, default_ms: f64) -> f64 {
        self.threshold_ms.unwrap_or(default_ms)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let regions: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(regions.unwrap_or_default())
}
