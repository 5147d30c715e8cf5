//! Chat completion client
//!
//! Forwards visitor messages to an OpenAI-compatible chat-completions API and
//! relays the reply. Stateless: no conversation history is kept, and nothing
//! is persisted. Without an API key the widget degrades to a canned response.

use crate::config::ChatConfig;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Canned reply served when no API credential is configured.
pub const FALLBACK_REPLY: &str = "Thank you for your message. Our sales team will contact you \
     shortly. (We could not connect you to AI chat because it is not configured yet.)";

/// Reply used when the upstream returns an empty completion.
const EMPTY_COMPLETION_REPLY: &str = "I apologize, I couldn't generate a response.";

/// Instructions sent with every forwarded message.
const SYSTEM_PROMPT: &str = "You are a helpful, professional AI assistant for a luxury real \
     estate builder. Provide polite, concise, and helpful answers about buying homes, \
     amenities, and booking site visits. Do not invent specific prices or dates if not known.";

/// Client for the external chat-completions API
pub struct ChatClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
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

impl ChatClient {
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        }
    }

    /// Whether an API credential is available for live chat.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Forward one visitor message and return the assistant's reply text.
    pub async fn complete(&self, message: &str) -> Result<String, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Upstream("chat API key not configured".to_string()))?;

        let request = CompletionRequest {
            model: &self.model,
            messages: vec![
                WireMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                WireMessage {
                    role: "user",
                    content: message,
                },
            ],
        };

        debug!("Forwarding chat message to {} ({})", self.base_url, self.model);

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!(
                "completion API returned {}",
                status
            )));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("invalid completion body: {}", e)))?;

        let reply = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .unwrap_or_else(|| EMPTY_COMPLETION_REPLY.to_string());

        Ok(reply)
    }
}
