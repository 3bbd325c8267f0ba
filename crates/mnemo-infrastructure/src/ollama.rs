//! Ollama-backed inference collaborator.
//!
//! Speaks the Ollama `/api/chat` protocol. Any failure is surfaced as an
//! `Inference` error; the core never fabricates a response from it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use mnemo_core::inference::{ChatMessage, InferenceClient};
use mnemo_core::{MnemoError, Result};

/// Inference client for an Ollama-compatible HTTP endpoint.
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OllamaClient {
    /// Creates a client for the given base URL (e.g.
    /// `http://localhost:11434`) and model name.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }
}

#[async_trait]
impl InferenceClient for OllamaClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);
        debug!(model = %self.model, message_count = messages.len(), "requesting completion");

        let response = self
            .client
            .post(&url)
            .json(&ChatRequest {
                model: &self.model,
                messages,
                stream: false,
            })
            .send()
            .await
            .map_err(|e| MnemoError::inference(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(MnemoError::inference(format!(
                "server returned {}",
                response.status()
            )));
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| MnemoError::inference(format!("unparseable response: {e}")))?;

        Ok(body.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mnemo_core::inference::ChatRole;

    #[test]
    fn request_body_matches_ollama_wire_format() {
        let messages = vec![
            ChatMessage::new(ChatRole::System, "be helpful"),
            ChatMessage::new(ChatRole::User, "hi"),
        ];
        let request = ChatRequest {
            model: "llama3.2",
            messages: &messages,
            stream: false,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"model":"llama3.2","messages":[{"role":"system","content":"be helpful"},{"role":"user","content":"hi"}],"stream":false}"#
        );
    }

    #[test]
    fn response_body_parses_message_content() {
        let body: ChatResponse = serde_json::from_str(
            r#"{"model":"llama3.2","message":{"role":"assistant","content":"hello!"},"done":true}"#,
        )
        .unwrap();
        assert_eq!(body.message.content, "hello!");
    }

    #[test]
    fn trailing_slash_in_base_url_is_normalized() {
        let client = OllamaClient::new("http://localhost:11434/", "llama3.2");
        assert_eq!(client.base_url, "http://localhost:11434");
    }
}
