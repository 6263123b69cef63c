use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::error::{PlannerError, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_TEMPERATURE: f32 = 0.6;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Speaker of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message of a chat-completion conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A language model that turns a conversation into a single text completion.
#[async_trait]
pub trait ChatModel: Send + Sync + std::fmt::Debug {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;
}

/// Client for OpenAI-compatible chat-completion endpoints (Groq by default).
#[derive(Clone, Debug)]
pub struct ChatClient {
    api_key: Option<String>,
    base_url: String,
    model: String,
    temperature: f32,
    timeout: Duration,
}

impl ChatClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Build from `GROQ_API_KEY`, `GROQ_BASE_URL` and `TRIP_PLANNER_MODEL`.
    ///
    /// A missing key is not an error here; the provider rejects the request later.
    pub fn from_env() -> Self {
        let mut client = Self::new(std::env::var("GROQ_API_KEY").ok());
        if let Ok(base_url) = std::env::var("GROQ_BASE_URL") {
            client.base_url = base_url;
        }
        if let Ok(model) = std::env::var("TRIP_PLANNER_MODEL") {
            client.model = model;
        }
        client
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn chat_completion(&self, body: &Value) -> Result<Value> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| PlannerError::Config(format!("Failed to build HTTP client: {err}")))?;

        let mut request = client
            .post(build_chat_url(&self.base_url))
            .header("Content-Type", "application/json")
            .json(body);

        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|err| PlannerError::Llm(format!("HTTP request failed: {err}")))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|err| PlannerError::Llm(format!("Failed to read response: {err}")))?;

        let response_json: Value = match serde_json::from_str(&response_text) {
            Ok(value) => value,
            Err(err) if status.is_success() => {
                return Err(PlannerError::Llm(format!("Failed to parse JSON: {err}")));
            }
            Err(_) => {
                return Err(PlannerError::Llm(format!(
                    "HTTP {} error: {}",
                    status, response_text
                )));
            }
        };

        if !status.is_success() {
            let api_message = response_json
                .get("error")
                .and_then(|error| error.get("message"))
                .and_then(|value| value.as_str())
                .map(|s| s.to_string())
                .unwrap_or(response_text);

            return Err(PlannerError::Llm(format!(
                "HTTP {} error: {}",
                status, api_message
            )));
        }

        if let Some(error) = response_json.get("error") {
            let error_message = error
                .get("message")
                .and_then(|value| value.as_str())
                .map(|s| s.to_string())
                .unwrap_or_else(|| error.to_string());
            return Err(PlannerError::Llm(format!("API error: {}", error_message)));
        }

        Ok(response_json)
    }
}

#[async_trait]
impl ChatModel for ChatClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let body = ChatCompletionRequest::new(self.model.clone(), messages.to_vec())
            .with_temperature(Some(self.temperature))
            .into_value()?;

        debug!(model = %self.model, messages = messages.len(), "sending chat completion");
        let response = self.chat_completion(&body).await?;
        extract_content(&response)
    }
}

fn build_chat_url(base_url: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if trimmed.ends_with("/chat/completions") {
        trimmed.to_string()
    } else {
        format!("{}/chat/completions", trimmed)
    }
}

fn extract_content(response: &Value) -> Result<String> {
    let first_choice = response
        .get("choices")
        .and_then(|value| value.as_array())
        .and_then(|choices| choices.first())
        .ok_or_else(|| {
            PlannerError::Llm("Completion response contained no choices".to_string())
        })?;

    first_choice
        .get("message")
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .map(|content| content.to_string())
        .ok_or_else(|| PlannerError::Llm("Completion response missing message content".to_string()))
}

#[derive(Clone, Debug)]
pub struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: Option<f32>,
}

impl ChatCompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn into_value(self) -> Result<Value> {
        let mut body = json!({
            "model": self.model,
            "messages": serde_json::to_value(&self.messages)?,
        });

        if let Some(temperature) = self.temperature {
            body["temperature"] = json!(temperature);
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_chat_url() {
        assert_eq!(
            build_chat_url("https://api.groq.com/openai/v1/"),
            "https://api.groq.com/openai/v1/chat/completions"
        );
        assert_eq!(
            build_chat_url("http://localhost/v1/chat/completions"),
            "http://localhost/v1/chat/completions"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let body = ChatCompletionRequest::new(
            "llama",
            vec![ChatMessage::system("rules"), ChatMessage::user("go")],
        )
        .with_temperature(Some(0.5))
        .into_value()
        .unwrap();

        assert_eq!(body["model"], "llama");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "go");
        assert_eq!(body["temperature"], 0.5);
    }

    #[test]
    fn test_extract_content() {
        let response = json!({
            "choices": [{"message": {"role": "assistant", "content": "[]"}}]
        });
        assert_eq!(extract_content(&response).unwrap(), "[]");

        let empty = json!({"choices": []});
        assert!(matches!(extract_content(&empty), Err(PlannerError::Llm(_))));
    }
}
