//! Configuration management for the Hinglish translator

use crate::error::{HinglishError, Result};
use crate::llm::prompts::TranslationTone;
use crate::llm::translator::{DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub translation: TranslationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    pub model: String,
    pub base_url: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub temperature: f64,
    pub timeout_secs: u64,
    pub default_tone: TranslationTone,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub max_file_size_mb: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub color_output: bool,
    pub show_stats: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translation: TranslationConfig {
                model: DEFAULT_MODEL.to_string(),
                base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
                api_key_env: "GEMINI_API_KEY".to_string(),
                temperature: DEFAULT_TEMPERATURE,
                timeout_secs: 60,
                default_tone: TranslationTone::Casual,
            },
            input: InputConfig {
                max_file_size_mb: 10,
            },
            output: OutputConfig {
                color_output: true,
                show_stats: true,
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first use
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| HinglishError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| HinglishError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("hinglish-translator")
            .join("config.toml")
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=2.0).contains(&self.translation.temperature) {
            return Err(HinglishError::Configuration(format!(
                "translation.temperature must be within 0.0..=2.0, got {}",
                self.translation.temperature
            )));
        }
        if self.translation.model.trim().is_empty() {
            return Err(HinglishError::Configuration("translation.model is empty".to_string()));
        }
        Ok(())
    }

    /// API key from the configured environment variable. A missing key is
    /// returned as empty and left for the remote service to reject.
    pub fn api_key(&self) -> String {
        std::env::var(&self.translation.api_key_env).unwrap_or_default()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.translation.timeout_secs)
    }

    pub fn max_file_bytes(&self) -> u64 {
        self.input.max_file_size_mb.saturating_mul(1024 * 1024)
    }
}
