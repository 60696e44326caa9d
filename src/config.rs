use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::constants::{
    API_BASE_URL_ENV, API_TOKEN_ENV, CONFIG_PATH, DEFAULT_API_BASE_URL, DEFAULT_EXPORT_PREFIX,
    DEFAULT_OUTPUT_DIR, DEFAULT_TIMEOUT_SECONDS,
};
use crate::error::{AdminError, Result};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Bearer token. Normally supplied through `DDKA_API_TOKEN` rather than the file.
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_prefix")]
    pub default_prefix: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECONDS
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

fn default_prefix() -> String {
    DEFAULT_EXPORT_PREFIX.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_seconds: default_timeout(), token: None }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { output_dir: default_output_dir(), default_prefix: default_prefix() }
    }
}

impl Config {
    /// Loads `config.toml` from the working directory, then applies environment overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_PATH)
    }

    pub fn load_from(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();
        let mut config = if config_path.exists() {
            let config_content = fs::read_to_string(config_path).map_err(|e| {
                AdminError::Config(format!(
                    "Failed to read config file '{}': {}",
                    config_path.display(),
                    e
                ))
            })?;
            Self::from_toml(&config_content)?
        } else {
            debug!("No config file at {}, using defaults", config_path.display());
            Config::default()
        };
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(base_url) = std::env::var(API_BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                self.api.base_url = base_url.trim().to_string();
            }
        }
        if let Ok(token) = std::env::var(API_TOKEN_ENV) {
            if !token.trim().is_empty() {
                self.api.token = Some(token.trim().to_string());
            }
        }
    }

    fn validate(&self) -> Result<()> {
        let url = &self.api.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AdminError::Config(format!(
                "api.base_url must be an http(s) URL, got '{}'",
                self.api.base_url
            )));
        }
        if self.api.timeout_seconds == 0 {
            return Err(AdminError::Config("api.timeout_seconds must be positive".to_string()));
        }
        Ok(())
    }
}
