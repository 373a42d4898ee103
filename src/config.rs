use serde::{Deserialize, Serialize};
use std::fs;
use anyhow::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Which backend to talk to: "openai" or "ollama".
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Overrides the provider's default endpoint when set.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Passed explicitly into the backend constructor; the backends never
    /// read ambient process state themselves.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> f32 {
    0.1
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            base_url: None,
            api_key: None,
            temperature: default_temperature(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Locate and load the configuration: `CONFIG_PATH` first, then
    /// `conf.yaml` in the working directory, then built-in defaults.
    /// A file that exists but does not parse is an error; a missing file
    /// is not. The API key falls back to `OPENAI_API_KEY` when the file
    /// leaves it unset.
    pub fn resolve() -> Result<Self> {
        let candidates: Vec<String> = vec![
            std::env::var("CONFIG_PATH").ok(),
            Some("conf.yaml".to_string()),
        ]
        .into_iter()
        .flatten()
        .collect();

        let mut config = Config::default();
        for path in candidates {
            if std::path::Path::new(&path).exists() {
                config = Config::load(&path)?;
                tracing::info!("Loaded configuration from: {}", path);
                break;
            }
        }

        if config.llm.api_key.is_none() {
            config.llm.api_key = std::env::var("OPENAI_API_KEY").ok();
        }

        Ok(config)
    }
}
