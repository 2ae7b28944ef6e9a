//! Pure Ollama REST API client
//!
//! A clean, minimal client for a local (or remote) Ollama server with no
//! domain-specific logic. Supports non-streaming chat completions.
//!
//! # Example
//!
//! ```rust,ignore
//! use ollama_client::{OllamaClient, ChatRequest, Message};
//!
//! let client = OllamaClient::new();
//!
//! let response = client.chat(ChatRequest {
//!     model: "llama3".into(),
//!     messages: vec![Message::user("Hello!")],
//!     ..Default::default()
//! }).await?;
//! ```

pub mod error;
pub mod types;

pub use error::{OllamaError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// Default base URL for a locally running Ollama server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Pure Ollama API client.
#[derive(Clone)]
pub struct OllamaClient {
    http_client: Client,
    base_url: String,
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl OllamaClient {
    /// Create a new client pointing at the default local Ollama server.
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set a custom base URL (for remote servers, proxies, tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Chat completion.
    ///
    /// Sends messages to the chat API and returns the generated content.
    /// `stream` is always sent explicitly so the server never falls back to
    /// its streaming default.
    pub async fn chat(&self, request: ChatRequest) -> Result<ChatResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/api/chat", self.base_url))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Ollama request failed");
                OllamaError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Ollama API error");
            return Err(OllamaError::Api(format!("Ollama API error: {}", error_text)));
        }

        let chat_response: types::ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| OllamaError::Parse(e.to_string()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "Ollama chat completion"
        );

        let usage = match (chat_response.prompt_eval_count, chat_response.eval_count) {
            (Some(prompt_tokens), Some(completion_tokens)) => Some(Usage {
                prompt_tokens,
                completion_tokens,
            }),
            _ => None,
        };

        Ok(ChatResponse {
            content: chat_response.message.map(|m| m.content),
            usage,
        })
    }
}
