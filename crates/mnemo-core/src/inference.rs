//! Inference collaborator interface.
//!
//! The core never generates responses itself; it hands an assembled message
//! list to whatever implements [`InferenceClient`] (e.g. the Ollama-backed
//! client in the infrastructure crate, or a scripted stub in tests).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Role of a chat message handed to the inference collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// System instruction or injected memory block.
    System,
    /// Message from the user.
    User,
    /// Message from the assistant.
    Assistant,
}

/// A single message in the prompt handed to the inference collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message sender.
    pub role: ChatRole,
    /// The content of the message.
    pub content: String,
}

impl ChatMessage {
    /// Creates a new chat message.
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// An external model-inference collaborator.
///
/// Accepts the full ordered prompt (system instruction, memory block,
/// current conversation, new user message) and returns the assistant
/// response, or fails with `Inference`.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Produces the assistant response for the given prompt.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;
}
