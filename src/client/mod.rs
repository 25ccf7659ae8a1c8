//! Chat-completion client abstraction
//!
//! The pipeline only needs "send a conversation, get text back", so the
//! network layer is hidden behind [`CompletionClient`]. The real
//! implementation talks to an OpenAI-compatible `/chat/completions`
//! endpoint; tests substitute a canned client.

use crate::error::{ReadmeError, Result};
use serde::{Deserialize, Serialize};

pub mod groq;

pub use groq::GroqClient;

pub const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant to the user";
pub const USER_PREAMBLE: &str = "Generate a README.md file for the following input files:\n\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: Role::System, content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }
}

/// A service that turns a conversation into generated text.
pub trait CompletionClient {
    /// Send one request and return the text of the first choice.
    fn send(&self, model: &str, api_key: &str, messages: &[ChatMessage]) -> Result<String>;
}

impl<T: CompletionClient + ?Sized> CompletionClient for &T {
    fn send(&self, model: &str, api_key: &str, messages: &[ChatMessage]) -> Result<String> {
        (**self).send(model, api_key, messages)
    }
}

/// The fixed two-message conversation for a README request.
pub fn build_messages(prompt: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(SYSTEM_INSTRUCTION), ChatMessage::user(format!("{USER_PREAMBLE}{prompt}"))]
}

/// Ask the completion service for a README covering `prompt`.
pub fn complete<C: CompletionClient + ?Sized>(
    client: &C,
    prompt: &str,
    model: &str,
    api_key: &str,
) -> Result<String> {
    let messages = build_messages(prompt);
    tracing::info!("Requesting completion from model {}", model);
    client.send(model, api_key, &messages)
}

/// Request body for `POST /chat/completions`.
#[derive(Debug, Serialize)]
pub(crate) struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Extract the first choice's message content from a response body.
pub(crate) fn parse_completion(body: &str) -> Result<String> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| ReadmeError::Api(format!("Failed to parse response JSON: {e}")))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or(ReadmeError::EmptyResponse)
}

/// Pull `error.message` out of an error body, if the service sent one.
pub(crate) fn parse_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value["error"]["message"].as_str().map(str::to_string)
}
