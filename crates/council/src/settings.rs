use crate::errors::{to_env_var, SettingsError};
use crate::providers::configs::{OllamaClientConfig, OLLAMA_HOST};
use config::{Config, Environment};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Process-wide settings, read from the environment
///
/// `OLLAMA_API_URL` sets the backend and every other key uses the `COUNCIL_` prefix,
/// e.g. `COUNCIL_MODELS=mistral,llama2` or `COUNCIL_TIMEOUT_SECS=60`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_models")]
    pub models: Vec<String>,
    #[serde(default = "default_chairman_model")]
    pub chairman_model: String,
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Settings {
    pub fn new() -> Result<Self, SettingsError> {
        Self::load_and_validate()
    }

    fn load_and_validate() -> Result<Self, SettingsError> {
        // Only OLLAMA_API_URL is read from the OLLAMA_ namespace, the rest belongs to Ollama itself
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("COUNCIL")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("models")
                    .try_parsing(true),
            )
            .set_override_option("api_url", env::var("OLLAMA_API_URL").ok())?
            .build()?;

        let settings: Self = match config.try_deserialize() {
            Ok(settings) => settings,
            Err(err) => {
                tracing::debug!("Configuration error: {:?}", &err);
                return Err(match err {
                    config::ConfigError::NotFound(field) => SettingsError::Invalid {
                        env_var: to_env_var(&field),
                        reason: "not found".to_string(),
                    },
                    other => SettingsError::Other(other),
                });
            }
        };

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |field: &str, reason: &str| SettingsError::Invalid {
            env_var: to_env_var(field),
            reason: reason.to_string(),
        };

        if self.api_url.trim().is_empty() {
            return Err(invalid("api_url", "must not be empty"));
        }
        if self.models.iter().all(|model| model.trim().is_empty()) {
            return Err(invalid("models", "at least one model is required"));
        }
        if self.timeout_secs == 0 {
            return Err(invalid("timeout_secs", "must be greater than zero"));
        }
        Ok(())
    }

    /// Council members with surrounding whitespace and empty entries removed
    pub fn council_models(&self) -> Vec<String> {
        self.models
            .iter()
            .map(|model| model.trim())
            .filter(|model| !model.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn client_config(&self) -> OllamaClientConfig {
        OllamaClientConfig::new(self.api_url.clone())
    }
}

fn default_api_url() -> String {
    OLLAMA_HOST.to_string()
}

fn default_models() -> Vec<String> {
    ["mistral", "neural-chat", "dolphin-mixtral", "llama2"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_chairman_model() -> String {
    "mistral".to_string()
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data/conversations")
}

fn default_timeout_secs() -> u64 {
    120
}
