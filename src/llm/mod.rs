pub mod ollama;
pub mod openai;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::LlmConfig;

/// Ways a model call can fail. None of these are retried; a failed call
/// surfaces to whoever started the scenario.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request to model backend failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("model backend returned {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("model backend returned no completion")]
    EmptyCompletion,
}

/// Interface for a text-generation backend.
/// One prompt in, one completion out. No streaming, no retries, no state
/// held between calls.
#[async_trait]
pub trait LlmBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, BackendError>;
}

/// Create a backend from the configuration.
pub fn backend_from_config(config: &LlmConfig) -> anyhow::Result<Arc<dyn LlmBackend>> {
    match config.provider.as_str() {
        "openai" => Ok(Arc::new(openai::OpenAiBackend::new(
            config.model.clone(),
            config
                .base_url
                .clone()
                .unwrap_or_else(|| openai::DEFAULT_BASE_URL.to_string()),
            config.api_key.clone().unwrap_or_default(),
            config.temperature,
        ))),
        "ollama" => Ok(Arc::new(ollama::OllamaBackend::new(
            config.model.clone(),
            config
                .base_url
                .clone()
                .unwrap_or_else(|| ollama::DEFAULT_BASE_URL.to_string()),
        ))),
        other => Err(anyhow::anyhow!("Unknown llm provider: {}", other)),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;

    /// Backend that replays canned responses and records every prompt it
    /// was given, in call order.
    pub struct ScriptedBackend {
        replies: Mutex<VecDeque<String>>,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedBackend {
        pub fn new<I>(replies: I) -> Self
        where
            I: IntoIterator,
            I::Item: Into<String>,
        {
            Self {
                replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl LlmBackend for ScriptedBackend {
        async fn generate(&self, prompt: &str) -> Result<String, BackendError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .ok_or(BackendError::EmptyCompletion)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_rejects_unknown_provider() {
        let config = LlmConfig {
            provider: "claude".to_string(),
            ..LlmConfig::default()
        };
        assert!(backend_from_config(&config).is_err());
    }

    #[test]
    fn factory_builds_both_known_providers() {
        for provider in ["openai", "ollama"] {
            let config = LlmConfig {
                provider: provider.to_string(),
                ..LlmConfig::default()
            };
            assert!(backend_from_config(&config).is_ok(), "{}", provider);
        }
    }
}
