use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{BackendError, LlmBackend};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Hosted chat-completion backend (OpenAI and API-compatible servers).
/// Every prompt goes out as a single user message.
pub struct OpenAiBackend {
    client: Client,
    model: String,
    base_url: String,
    api_key: String,
    temperature: f32,
}

impl OpenAiBackend {
    pub fn new(model: String, base_url: String, api_key: String, temperature: f32) -> Self {
        info!(
            "Initialized OpenAiBackend: model={}, base_url={}",
            model, base_url
        );
        Self {
            client: Client::new(),
            model,
            base_url,
            api_key,
            temperature,
        }
    }
}

#[async_trait]
impl LlmBackend for OpenAiBackend {
    async fn generate(&self, prompt: &str) -> Result<String, BackendError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
        };

        debug!(
            "Chat completion request: model={}, prompt={} chars",
            self.model,
            prompt.len()
        );

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Api { status, body });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(BackendError::EmptyCompletion)
    }
}
