//! Groq chat-completions client (OpenAI-compatible `/chat/completions`)

use super::{parse_completion, parse_error_message, ChatCompletionRequest, ChatMessage, CompletionClient};
use crate::error::{ReadmeError, Result};
use std::error::Error as _;
use std::time::Duration;

pub struct GroqClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl GroqClient {
    /// Create a client for `base_url` (e.g. `https://api.groq.com/openai/v1`).
    ///
    /// The request is allowed to take as long as the service needs: no
    /// timeout is configured.
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(None::<Duration>)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ReadmeError::Api(format!("Failed to build HTTP client: {}", describe(&e))))?;

        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
    }

    fn url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl CompletionClient for GroqClient {
    fn send(&self, model: &str, api_key: &str, messages: &[ChatMessage]) -> Result<String> {
        let url = self.url();
        tracing::debug!("POST {} ({} messages)", url, messages.len());

        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(&ChatCompletionRequest { model, messages })
            .send()
            .map_err(|e| ReadmeError::Api(format!("HTTP request failed: {}", describe(&e))))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| ReadmeError::Api(format!("Failed to read response: {}", describe(&e))))?;

        if !status.is_success() {
            let detail = parse_error_message(&body).unwrap_or_else(|| body.trim().to_string());
            return Err(ReadmeError::Api(format!("HTTP {status}: {detail}")));
        }

        tracing::debug!("Received {} bytes from completion API", body.len());
        parse_completion(&body)
    }
}

/// Render an error together with its source chain.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
