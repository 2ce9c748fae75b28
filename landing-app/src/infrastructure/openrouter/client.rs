use super::prompt::SYSTEM_PROMPT;
use super::types::{ChatCompletionRequest, ChatCompletionResponse};
use crate::infrastructure::CompletionClient;
use async_trait::async_trait;
use landing_errors::AppError;

const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";
const MODEL: &str = "deepseek/deepseek-chat-v3-0324";
const APP_REFERER: &str = "https://kusala.tech";
const APP_TITLE: &str = "Landing Page Generator";

pub struct OpenRouterClient {
    http_client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl OpenRouterClient {
    pub fn new(api_key: String) -> Result<Self, AppError> {
        Self::with_endpoint(api_key, OPENROUTER_API_URL)
    }

    pub fn with_endpoint(api_key: String, endpoint: impl Into<String>) -> Result<Self, AppError> {
        if api_key.trim().is_empty() {
            return Err(AppError::MissingApiKey);
        }
        Ok(Self {
            http_client: reqwest::Client::new(),
            api_key,
            endpoint: endpoint.into(),
        })
    }

    /// One chat-completion round trip. Errors are returned, not logged away;
    /// the [`CompletionClient`] impl decides what to do with them.
    pub async fn chat(&self, prompt: &str) -> Result<String, AppError> {
        let request = ChatCompletionRequest::new(MODEL, SYSTEM_PROMPT, prompt.to_string());
        tracing::debug!(
            endpoint = %self.endpoint,
            model = MODEL,
            prompt_chars = prompt.chars().count(),
            "Sending chat completion request"
        );

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("HTTP-Referer", APP_REFERER)
            .header("X-Title", APP_TITLE)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::OpenRouterError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("OpenRouter error: {} - {}", status, body);
            return Err(AppError::OpenRouterError(format!("API error: {}", status)));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::MalformedResponse(e.to_string()))?;

        completion.into_first_content()
    }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
    async fn complete(&self, prompt: &str) -> Option<String> {
        match self.chat(prompt).await {
            Ok(content) => Some(content),
            Err(e) => {
                tracing::warn!("Completion unavailable, caller will fall back: {}", e);
                None
            }
        }
    }
}
