//! Global memory window assembly.
//!
//! The assistant carries one continuous memory across *all* conversations
//! rather than conversation-scoped recall: every prompt is prefixed with a
//! bounded window of past completed turns drawn globally from the store.
//! Bounding the window keeps prompt cost and latency flat no matter how
//! much history accumulates.

use crate::conversation::{CompletedTurn, ConversationStore};
use crate::inference::{ChatMessage, ChatRole};

/// Default maximum number of past turns replayed into a prompt.
pub const DEFAULT_WINDOW_TURNS: usize = 50;

/// Assembles bounded context windows from a [`ConversationStore`].
///
/// Holds no state across calls; every window is a fresh, disposable view.
#[derive(Debug, Clone, Copy)]
pub struct MemoryWindow {
    max_turns: usize,
}

impl Default for MemoryWindow {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_WINDOW_TURNS,
        }
    }
}

impl MemoryWindow {
    /// Creates a window builder bounded to `max_turns` entries.
    pub fn new(max_turns: usize) -> Self {
        Self { max_turns }
    }

    /// Builds the context window for the next prompt.
    ///
    /// Conversations are visited in creation order and their completed
    /// turns in chronological order, concatenated into one flat sequence;
    /// the last `max_turns` entries of that sequence form the window.
    /// Ordering deliberately follows conversation creation order, not
    /// wall-clock time, and pending turns are excluded.
    pub fn build(&self, store: &ConversationStore) -> Vec<CompletedTurn> {
        let flattened: Vec<CompletedTurn> = store
            .iter_in_creation_order()
            .flat_map(|conversation| conversation.completed_turns())
            .collect();

        let skip = flattened.len().saturating_sub(self.max_turns);
        flattened.into_iter().skip(skip).collect()
    }
}

/// Renders a window of past turns as a single memory block for a system
/// message.
pub fn render_memory_block(window: &[CompletedTurn]) -> String {
    window
        .iter()
        .map(|turn| format!("User: {}\nAssistant: {}", turn.user, turn.assistant))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Builds the full message list for the inference collaborator: the persona
/// instruction, a memory system message when any past turns exist, the
/// active conversation's completed turns as user/assistant messages, and
/// finally the new user message.
pub fn build_messages(
    system_instruction: &str,
    window: &[CompletedTurn],
    current_turns: &[CompletedTurn],
    user_message: &str,
) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage::new(ChatRole::System, system_instruction)];

    if !window.is_empty() {
        messages.push(ChatMessage::new(
            ChatRole::System,
            format!(
                "Here is a summary of past conversation turns:\n\n{}",
                render_memory_block(window)
            ),
        ));
    }

    for turn in current_turns {
        messages.push(ChatMessage::new(ChatRole::User, turn.user.clone()));
        messages.push(ChatMessage::new(ChatRole::Assistant, turn.assistant.clone()));
    }

    messages.push(ChatMessage::new(ChatRole::User, user_message));
    messages
}
