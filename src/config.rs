use serde::Deserialize;

use crate::models::DEFAULT_THRESHOLD_MS;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: "0.0.0.0".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    pub path: String,
    /// Re-read the file on every request instead of caching it after the first load.
    #[serde(default)]
    pub reload_per_request: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: "data/q-vercel-latency.json".into(),
            reload_per_request: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Breach threshold applied when a request omits `threshold_ms`.
    #[serde(default = "default_threshold_ms")]
    pub default_threshold_ms: f64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_threshold_ms: default_threshold_ms(),
        }
    }
}

fn default_threshold_ms() -> f64 {
    DEFAULT_THRESHOLD_MS
}

impl AppConfig {
    /// Reads `CONFIG_FILE` (default `config.toml`); a missing file means built-in defaults.
    /// `DATASET_PATH` overrides `dataset.path`.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let mut config = match std::fs::read_to_string(&path) {
            Ok(s) => toml::from_str(&s)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("{} not found, using default config", path);
                AppConfig::default()
            }
            Err(e) => return Err(anyhow::anyhow!("{}: {}", path, e)),
        };
        if let Ok(dataset_path) = std::env::var("DATASET_PATH") {
            config.dataset.path = dataset_path;
        }
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            !self.dataset.path.is_empty(),
            "dataset.path must be non-empty"
        );
        anyhow::ensure!(
            self.api.default_threshold_ms.is_finite(),
            "api.default_threshold_ms must be finite, got {}",
            self.api.default_threshold_ms
        );
        Ok(())
    }
}
