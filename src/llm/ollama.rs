use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{BackendError, LlmBackend};

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Local inference backend speaking the Ollama generate API.
/// No credential: the server runs on the caller's own machine.
pub struct OllamaBackend {
    client: Client,
    model: String,
    base_url: String,
}

impl OllamaBackend {
    pub fn new(model: String, base_url: String) -> Self {
        info!(
            "Initialized OllamaBackend: model={}, base_url={}",
            model, base_url
        );
        Self {
            client: Client::new(),
            model,
            base_url,
        }
    }
}

#[async_trait]
impl LlmBackend for OllamaBackend {
    async fn generate(&self, prompt: &str) -> Result<String, BackendError> {
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        debug!(
            "Generate request: model={}, prompt={} chars",
            self.model,
            prompt.len()
        );

        let url = format!("{}/api/generate", self.base_url);
        let response = self.client.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Api { status, body });
        }

        let generated: GenerateResponse = response.json().await?;
        Ok(generated.response)
    }
}
