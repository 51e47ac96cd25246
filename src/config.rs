use crate::defaults;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub pipeline: PipelineConfig,
}

/// Remote service configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    /// Path to the service key file; the CLI flag overrides this.
    pub credentials: Option<PathBuf>,
    pub asr_endpoint: String,
    pub translate_endpoint: String,
    pub target_language: String,
}

/// Pipeline tuning configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PipelineConfig {
    /// Source language code; absent means detect from the first chunk.
    pub language: Option<String>,
    pub chunk_length_ms: u64,
    pub pause_seconds: f64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            asr_endpoint: defaults::ASR_ENDPOINT.to_string(),
            translate_endpoint: defaults::TRANSLATE_ENDPOINT.to_string(),
            target_language: defaults::TARGET_LANGUAGE.to_string(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            language: None,
            chunk_length_ms: defaults::CHUNK_LENGTH_MS,
            pause_seconds: defaults::PAUSE_SECONDS,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Returns an error if the file contains invalid TOML.
    /// Missing fields will use default values.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a file or return defaults if file doesn't exist
    ///
    /// Only returns defaults if the file is missing.
    /// Returns errors for invalid TOML.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => {
                let config: Config = toml::from_str(&contents)?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply environment variable overrides
    ///
    /// Supported environment variables:
    /// - SONGSCRIBE_CREDENTIALS → service.credentials
    /// - SONGSCRIBE_LANGUAGE → pipeline.language
    /// - SONGSCRIBE_TARGET_LANGUAGE → service.target_language
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(credentials) = std::env::var("SONGSCRIBE_CREDENTIALS")
            && !credentials.is_empty()
        {
            self.service.credentials = Some(PathBuf::from(credentials));
        }

        if let Ok(language) = std::env::var("SONGSCRIBE_LANGUAGE")
            && !language.is_empty()
        {
            self.pipeline.language = Some(language);
        }

        if let Ok(target) = std::env::var("SONGSCRIBE_TARGET_LANGUAGE")
            && !target.is_empty()
        {
            self.service.target_language = target;
        }

        self
    }

    /// Get the default configuration file path
    ///
    /// Returns ~/.config/songscribe/config.toml on Linux
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join("songscribe")
            .join("config.toml")
    }
}
