//! Conversation domain model.
//!
//! This module contains the core entities of the memory subsystem: a
//! `Conversation` (a named thread of exchanges) and its `Turn`s.

/// A single exchange within a conversation.
///
/// A turn is created as soon as the user message is recorded and is
/// *pending* until the assistant response arrives. The pending state is
/// carried explicitly by `assistant_response` being `None`, which keeps
/// "no response yet" distinct from "empty response received".
///
/// Turns deliberately do not serialize themselves; persistence goes
/// through the storage DTOs, which only ever write completed turns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Text authored by the user. Never empty.
    pub user_message: String,
    /// Text authored by the model, or `None` while the turn is in flight.
    pub assistant_response: Option<String>,
}

impl Turn {
    /// Creates a new pending turn for the given user message.
    pub fn pending(user_message: impl Into<String>) -> Self {
        Self {
            user_message: user_message.into(),
            assistant_response: None,
        }
    }

    /// Returns true once the assistant response has been filled in.
    pub fn is_complete(&self) -> bool {
        self.assistant_response.is_some()
    }

    /// Returns true while the assistant response is still outstanding.
    pub fn is_pending(&self) -> bool {
        self.assistant_response.is_none()
    }

    /// Returns the completed `(user, assistant)` pair, or `None` while
    /// the turn is pending.
    pub fn as_completed(&self) -> Option<CompletedTurn> {
        self.assistant_response
            .as_ref()
            .map(|response| CompletedTurn {
                user: self.user_message.clone(),
                assistant: response.clone(),
            })
    }
}

/// A disposable view of a completed turn.
///
/// This is what the memory window and the inference prompt operate on;
/// it holds no state of its own and is rebuilt on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedTurn {
    /// The user message of the turn.
    pub user: String,
    /// The assistant response of the turn.
    pub assistant: String,
}

/// A named conversation thread.
///
/// Turns are append-only and chronological (oldest first); once persisted
/// they are never reordered or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    /// Unique conversation identifier (UUID format), assigned once at
    /// creation and never reused.
    pub id: String,
    /// Human-readable title, derived from the opening message.
    pub title: String,
    /// Ordered sequence of turns, oldest first.
    pub turns: Vec<Turn>,
}

impl Conversation {
    /// Creates a new, empty conversation.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            turns: Vec::new(),
        }
    }

    /// Iterates the completed turns of this conversation in chronological
    /// order, skipping any turn still in flight.
    pub fn completed_turns(&self) -> impl Iterator<Item = CompletedTurn> + '_ {
        self.turns.iter().filter_map(Turn::as_completed)
    }
}
