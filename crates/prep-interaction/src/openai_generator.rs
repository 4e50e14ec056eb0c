//! OpenAiGenerator - Direct REST implementation of the text generator.
//!
//! Calls the OpenAI Chat Completions API with the configured model and a
//! hard per-request timeout. Configuration comes from an explicit
//! `PrepConfig`; `try_from_env` offers the environment-variable path for
//! entry points.

use async_trait::async_trait;
use prep_core::config::{DEFAULT_MODEL, PrepConfig};
use prep_core::error::{PrepError, Result};
use prep_core::generator::{GenerationRequest, TextGenerator};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::debug;

const BASE_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Text generator backed by the OpenAI HTTP API.
#[derive(Clone)]
pub struct OpenAiGenerator {
    client: Client,
    api_key: String,
    model: String,
    default_max_tokens: u32,
}

impl OpenAiGenerator {
    /// Creates a generator from an explicit configuration.
    ///
    /// The request timeout from the configuration is applied to the HTTP
    /// client, so a hung upstream surfaces as an `ExternalService` error.
    pub fn new(config: &PrepConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| PrepError::config(format!("failed to build HTTP client: {err}")))?;
        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            default_max_tokens: config.max_completion_tokens,
        })
    }

    /// Loads configuration from environment variables.
    ///
    /// Reads `OPENAI_API_KEY` (required) and `OPENAI_MODEL_NAME`
    /// (defaults to `gpt-4o`).
    pub fn try_from_env() -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| PrepError::config("OPENAI_API_KEY not found in environment variables"))?;
        let model = env::var("OPENAI_MODEL_NAME").unwrap_or_else(|_| DEFAULT_MODEL.into());
        Self::new(&PrepConfig::new(api_key).with_model(model))
    }

    fn build_messages(request: &GenerationRequest) -> Vec<ChatMessage> {
        let mut messages = Vec::new();
        if let Some(system) = &request.system {
            messages.push(ChatMessage {
                role: "system".to_string(),
                content: system.clone(),
            });
        }
        messages.push(ChatMessage {
            role: "user".to_string(),
            content: request.prompt.clone(),
        });
        messages
    }

    async fn send_request(&self, body: &ChatCompletionRequest) -> Result<String> {
        let response = self
            .client
            .post(BASE_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    PrepError::external("generator request timed out")
                } else {
                    PrepError::external(format!("generator request failed: {err}"))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|err| PrepError::external(format!("failed to parse generator response: {err}")))?;

        extract_text_response(parsed)
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, request: GenerationRequest) -> Result<String> {
        debug!(model = %self.model, prompt_len = request.prompt.len(), "sending generation request");

        let body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: Self::build_messages(&request),
            max_tokens: Some(request.max_tokens.unwrap_or(self.default_max_tokens)),
        };

        self.send_request(&body).await
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn extract_text_response(response: ChatCompletionResponse) -> Result<String> {
    let text = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default();
    if text.trim().is_empty() {
        return Err(PrepError::external(
            "generator returned no content in the response",
        ));
    }
    Ok(text)
}

fn map_http_error(status: StatusCode, body: String) -> PrepError {
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or(body);
    PrepError::external(format!("generator returned {status}: {message}"))
}
