use landing_errors::AppError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
}

#[derive(Debug, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Option<MessageContent>,
}

#[derive(Debug, Deserialize)]
pub struct MessageContent {
    pub content: Option<String>,
}

impl ChatCompletionRequest {
    pub fn new(model: &str, system: &str, prompt: String) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: prompt,
                },
            ],
            temperature: 0.7,
            max_tokens: 500,
            top_p: 0.9,
            frequency_penalty: 0.1,
            presence_penalty: 0.1,
        }
    }
}

impl ChatCompletionResponse {
    pub fn into_first_content(self) -> Result<String, AppError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .ok_or_else(|| {
                AppError::MalformedResponse("missing choices[0].message.content".to_string())
            })
    }
}
