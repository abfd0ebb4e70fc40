//! OpenRouter API client for caption generation.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{GenerationError, Result};
use crate::persona;
use caption_models::GenerationRequest;

/// Environment variable for the OpenRouter API key.
pub const OPENROUTER_API_KEY_ENV: &str = "OPENROUTER_API_KEY";

/// Environment variable overriding the generation model.
pub const OPENROUTER_MODEL_ENV: &str = "OPENROUTER_MODEL";

/// OpenRouter chat completions endpoint.
const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Model used when `OPENROUTER_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "anthropic/claude-sonnet-4";

/// Request timeout; bounds how long one generation can stall the
/// dispatcher.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(45);

/// Sampling temperature for caption generation.
const TEMPERATURE: f32 = 0.8;

/// Token budget for one caption.
const MAX_TOKENS: u32 = 512;

/// Client for the caption generation backend.
#[derive(Clone)]
pub struct CaptionClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl CaptionClient {
    /// Create a new client with the given API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Create a client from environment variables.
    ///
    /// Uses `OPENROUTER_API_KEY` (required) and `OPENROUTER_MODEL`
    /// (optional).
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(OPENROUTER_API_KEY_ENV).map_err(|_| {
            GenerationError::Configuration(format!(
                "Missing {} environment variable",
                OPENROUTER_API_KEY_ENV
            ))
        })?;
        let model =
            std::env::var(OPENROUTER_MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self::new(api_key, model))
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate one caption for the given tier, topic, and details.
    pub async fn generate_caption(&self, request: &GenerationRequest) -> Result<String> {
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(persona::system_prompt(request.plan)),
                ChatMessage::user(persona::user_prompt(&request.topic, &request.details)),
            ],
            max_tokens: Some(MAX_TOKENS),
            temperature: Some(TEMPERATURE),
        };

        trace!(plan = %request.plan, topic = %request.topic, "sending generation request");

        let response = self
            .http
            .post(OPENROUTER_API_URL)
            .timeout(REQUEST_TIMEOUT)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let response: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))?;

        let caption = response
            .text()
            .ok_or_else(|| {
                GenerationError::MalformedResponse("response carries no message content".into())
            })?
            .trim()
            .to_string();

        if caption.is_empty() {
            return Err(GenerationError::MalformedResponse(
                "response content is empty".into(),
            ));
        }

        debug!(plan = %request.plan, chars = caption.len(), "caption generated");
        Ok(caption)
    }
}

/// Chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model identifier.
    pub model: String,

    /// Conversation messages.
    pub messages: Vec<ChatMessage>,

    /// Maximum tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Temperature for generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// A message in the chat conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender.
    pub role: String,

    /// Text content of the message.
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Chat completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Completion choices.
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

impl ChatResponse {
    /// The first choice's text content, if any.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

/// A choice in the completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The message for this choice.
    pub message: ResponseMessage,
}

/// Message in a completion response.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Text content of the response.
    #[serde(default)]
    pub content: Option<String>,
}
