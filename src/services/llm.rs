// SPDX-License-Identifier: MIT

//! Groq chat-completion client.
//!
//! Two fixed model profiles are exposed: a higher-capability "generator" that
//! produces full teaching pages and a cheaper "checker" that decides whether a
//! requested algorithm already exists. Both run at temperature zero. No retry,
//! no streaming, no rate-limit handling; provider failures surface as
//! `AppError::LlmApi`.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Which configured model a call site wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelProfile {
    /// Full page generation
    Generator,
    /// Duplicate-concept check
    Checker,
}

impl ModelProfile {
    pub fn model_name(&self) -> &'static str {
        match self {
            ModelProfile::Generator => "moonshotai/kimi-k2-instruct",
            ModelProfile::Checker => "llama-3.1-8b-instant",
        }
    }
}

/// Groq API client (OpenAI-compatible chat completions).
#[derive(Clone)]
pub struct LlmClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
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
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl LlmClient {
    /// Create a new client with the API key from configuration.
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: GROQ_BASE_URL.to_string(),
            api_key,
        }
    }

    /// Create a client pointed at a different base URL (for tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Send a single-message prompt and return the raw text completion.
    pub async fn complete(&self, profile: ModelProfile, prompt: &str) -> Result<String, AppError> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = ChatRequest {
            model: profile.model_name(),
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: 0.0,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::LlmApi(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::LlmApi(format!("HTTP {}: {}", status, text)));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| AppError::LlmApi(format!("Invalid completion response: {}", e)))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AppError::LlmApi("Completion had no choices".to_string()))?;

        tracing::debug!(
            model = profile.model_name(),
            chars = content.len(),
            "LLM completion received"
        );

        Ok(content)
    }
}
