use crate::model::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Optional JSON ruleset replacing the built-in keyword tables.
    pub rules_path: Option<PathBuf>,
    pub base_url: String,
    pub model: String,
    pub batch_size: usize,
    pub worker_count: usize,
    pub retry_count: usize,
    pub retry_backoff_ms: u64,
    pub request_timeout_secs: u64,
    pub preflight_timeout_secs: u64,
    pub temperature: f32,
    pub skip_inference: bool,
    pub isolate_failed_batches: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("products.json"),
            output_path: PathBuf::from("classified_ingredients.json"),
            rules_path: None,
            base_url: "http://localhost:11434".to_string(),
            model: "llama3.2:1b".to_string(),
            batch_size: 25,
            worker_count: 8,
            retry_count: 2,
            retry_backoff_ms: 1000,
            request_timeout_secs: 300,
            preflight_timeout_secs: 5,
            temperature: 0.0,
            skip_inference: false,
            isolate_failed_batches: false,
        }
    }
}

impl AppConfig {
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.batch_size == 0 {
            return Err(ConfigError::Invalid("batch_size must be at least 1".into()));
        }
        if self.worker_count == 0 {
            return Err(ConfigError::Invalid("worker_count must be at least 1".into()));
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::Invalid("model must not be empty".into()));
        }
        Ok(self)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn preflight_timeout(&self) -> Duration {
        Duration::from_secs(self.preflight_timeout_secs)
    }
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })?;
    let config: AppConfig = serde_json::from_str(&content).map_err(|source| ConfigError::Json {
        path: path.to_string(),
        source,
    })?;
    config.validate()
}
