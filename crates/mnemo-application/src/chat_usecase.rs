//! Chat turn orchestration.
//!
//! `ChatUseCase` drives the per-turn control flow: record the user message,
//! assemble the bounded memory window, hand the prompt to the inference
//! collaborator, commit the completed turn, and optionally speak the
//! response. The presentation layer only ever talks to this type and the
//! [`ConversationService`].

use std::path::PathBuf;
use std::sync::Arc;

use tracing::debug;

use mnemo_core::Result;
use mnemo_core::inference::InferenceClient;
use mnemo_core::memory::build_messages;
use mnemo_core::speech::SpeechSynthesizer;

use crate::conversation_service::ConversationService;

/// Outcome of one chat turn.
#[derive(Debug, Clone)]
pub struct ChatReply {
    /// The conversation the turn was recorded in (fresh when the caller
    /// passed none).
    pub conversation_id: String,
    /// The assistant response.
    pub response: String,
    /// Audio artifact path, when speech was requested and produced.
    pub audio: Option<PathBuf>,
}

/// Orchestrates a full user turn against the conversation memory.
pub struct ChatUseCase {
    service: Arc<ConversationService>,
    inference: Arc<dyn InferenceClient>,
    speech: Option<Arc<dyn SpeechSynthesizer>>,
    system_instruction: String,
}

impl ChatUseCase {
    /// Creates the use case with its collaborators.
    pub fn new(
        service: Arc<ConversationService>,
        inference: Arc<dyn InferenceClient>,
        speech: Option<Arc<dyn SpeechSynthesizer>>,
        system_instruction: impl Into<String>,
    ) -> Self {
        Self {
            service,
            inference,
            speech,
            system_instruction: system_instruction.into(),
        }
    }

    /// Processes one user message.
    ///
    /// With no `conversation_id`, a new conversation is created (titled
    /// from the message). The turn stays pending while the inference
    /// collaborator runs; if it fails, the error is surfaced and the
    /// pending turn is simply never completed, so no fabricated response
    /// reaches the store or the training log.
    pub async fn send_message(
        &self,
        conversation_id: Option<&str>,
        message: &str,
        speak: bool,
    ) -> Result<ChatReply> {
        let message = message.trim();

        let conversation_id = match conversation_id {
            Some(id) => {
                // Fail on a stale id before mutating anything.
                self.service.get_conversation(id).await?;
                id.to_string()
            }
            None => self.service.create_conversation(message).await?,
        };

        let turn_index = self
            .service
            .record_user_message(&conversation_id, message)
            .await?;

        // The window excludes the just-recorded pending turn; the active
        // conversation's completed turns ride along as explicit messages.
        let window = self.service.build_context().await;
        let current = self.service.completed_turns(&conversation_id).await?;
        let messages = build_messages(&self.system_instruction, &window, &current, message);
        debug!(
            conversation_id = %conversation_id,
            window_turns = window.len(),
            "dispatching prompt"
        );

        let response = self.inference.complete(&messages).await?;

        self.service
            .complete_turn(&conversation_id, turn_index, &response)
            .await?;

        let audio = match (&self.speech, speak) {
            (Some(speech), true) => speech.synthesize(&response).await?,
            _ => None,
        };

        Ok(ChatReply {
            conversation_id,
            response,
            audio,
        })
    }
}
