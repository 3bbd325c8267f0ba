//! In-memory conversation store.
//!
//! `ConversationStore` is the authoritative in-memory set of conversations.
//! It is pure state: durability (flush-after-write) and locking live in the
//! application layer, which wraps this type in `Arc<RwLock<_>>`.

use std::collections::HashMap;

use uuid::Uuid;

use crate::conversation::model::{Conversation, Turn};
use crate::conversation::title::{TitlePolicy, derive_title};
use crate::error::{MnemoError, Result};

/// The full mapping from conversation id to `Conversation`, plus the
/// creation order of ids.
///
/// Creation order is the deterministic iteration order for global memory
/// assembly; reversed, it yields the most-recently-created-first listing.
///
/// # Lifecycle
///
/// Populated once at startup from the persisted snapshot (empty when the
/// file is absent or unreadable), mutated by every recorded or completed
/// turn and every new conversation, never torn down explicitly.
#[derive(Debug, Default)]
pub struct ConversationStore {
    conversations: HashMap<String, Conversation>,
    /// Conversation ids in creation order (oldest first).
    order: Vec<String>,
    title_policy: TitlePolicy,
}

impl ConversationStore {
    /// Creates an empty store with the default title policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store with a custom title policy.
    pub fn with_title_policy(title_policy: TitlePolicy) -> Self {
        Self {
            conversations: HashMap::new(),
            order: Vec::new(),
            title_policy,
        }
    }

    /// Rebuilds a store from a loaded snapshot, preserving the snapshot's
    /// conversation order as creation order.
    pub fn from_snapshot(conversations: Vec<Conversation>, title_policy: TitlePolicy) -> Self {
        let mut store = Self::with_title_policy(title_policy);
        for conversation in conversations {
            store.order.push(conversation.id.clone());
            store
                .conversations
                .insert(conversation.id.clone(), conversation);
        }
        store
    }

    /// Creates a new conversation from its opening message and returns the
    /// fresh id.
    ///
    /// The title is derived from the opening message; the turn sequence
    /// starts empty (the opening message itself is recorded separately via
    /// [`record_user_message`](Self::record_user_message)).
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the opening message is empty after
    /// trimming.
    pub fn create(&mut self, opening_message: &str) -> Result<String> {
        if opening_message.trim().is_empty() {
            return Err(MnemoError::invalid_input("opening message is empty"));
        }

        let id = Uuid::new_v4().to_string();
        let title = derive_title(opening_message, &self.title_policy);

        self.conversations
            .insert(id.clone(), Conversation::new(id.clone(), title));
        self.order.push(id.clone());

        Ok(id)
    }

    /// Appends a pending turn to the named conversation and returns its
    /// index.
    ///
    /// The turn is observable immediately (for UI echo) but is not
    /// persisted until completed.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown conversation id and
    /// `InvalidInput` for an empty message.
    pub fn record_user_message(&mut self, conversation_id: &str, message: &str) -> Result<usize> {
        if message.trim().is_empty() {
            return Err(MnemoError::invalid_input("user message is empty"));
        }

        let conversation = self
            .conversations
            .get_mut(conversation_id)
            .ok_or_else(|| MnemoError::not_found("conversation", conversation_id))?;

        conversation.turns.push(Turn::pending(message));
        Ok(conversation.turns.len() - 1)
    }

    /// Fills in the assistant response for a pending turn.
    ///
    /// This is a one-way transition: a turn completes exactly once.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the conversation or turn index does not
    /// exist, and `InvalidState` if the turn is already complete.
    pub fn complete_turn(
        &mut self,
        conversation_id: &str,
        turn_index: usize,
        response: impl Into<String>,
    ) -> Result<()> {
        let conversation = self
            .conversations
            .get_mut(conversation_id)
            .ok_or_else(|| MnemoError::not_found("conversation", conversation_id))?;

        let turn = conversation
            .turns
            .get_mut(turn_index)
            .ok_or_else(|| MnemoError::not_found("turn", turn_index.to_string()))?;

        if turn.is_complete() {
            return Err(MnemoError::invalid_state(format!(
                "turn {turn_index} of conversation '{conversation_id}' is already complete"
            )));
        }

        turn.assistant_response = Some(response.into());
        Ok(())
    }

    /// Lists `(id, title)` pairs, most-recently-created first.
    pub fn list(&self) -> Vec<(String, String)> {
        self.order
            .iter()
            .rev()
            .filter_map(|id| self.conversations.get(id))
            .map(|c| (c.id.clone(), c.title.clone()))
            .collect()
    }

    /// Looks up a conversation by id.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the id is unknown.
    pub fn get(&self, conversation_id: &str) -> Result<&Conversation> {
        self.conversations
            .get(conversation_id)
            .ok_or_else(|| MnemoError::not_found("conversation", conversation_id))
    }

    /// Renames a conversation. Not part of the default flow.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown id and `InvalidInput` for an
    /// empty title.
    pub fn rename(&mut self, conversation_id: &str, title: &str) -> Result<()> {
        if title.trim().is_empty() {
            return Err(MnemoError::invalid_input("title is empty"));
        }
        let conversation = self
            .conversations
            .get_mut(conversation_id)
            .ok_or_else(|| MnemoError::not_found("conversation", conversation_id))?;
        conversation.title = title.to_string();
        Ok(())
    }

    /// Iterates conversations in creation order (oldest first).
    pub fn iter_in_creation_order(&self) -> impl Iterator<Item = &Conversation> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.conversations.get(id))
    }

    /// Number of conversations in the store.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true when the store holds no conversations.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The title policy this store derives titles with.
    pub fn title_policy(&self) -> &TitlePolicy {
        &self.title_policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_conversation() -> (ConversationStore, String) {
        let mut store = ConversationStore::new();
        let id = store.create("hello world").unwrap();
        (store, id)
    }

    #[test]
    fn create_rejects_empty_opening_message() {
        let mut store = ConversationStore::new();
        assert!(store.create("").unwrap_err().is_invalid_input());
        assert!(store.create("   ").unwrap_err().is_invalid_input());
        assert!(store.is_empty());
    }

    #[test]
    fn created_ids_are_pairwise_distinct() {
        let mut store = ConversationStore::new();
        let mut ids = Vec::new();
        for _ in 0..100 {
            ids.push(store.create("a message").unwrap());
        }
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn create_derives_title_from_opening_message() {
        let (store, id) = store_with_conversation();
        assert_eq!(store.get(&id).unwrap().title, "hello world");
        assert!(store.get(&id).unwrap().turns.is_empty());
    }

    #[test]
    fn record_appends_pending_turn_and_returns_index() {
        let (mut store, id) = store_with_conversation();
        assert_eq!(store.record_user_message(&id, "first").unwrap(), 0);
        assert_eq!(store.record_user_message(&id, "second").unwrap(), 1);

        let conversation = store.get(&id).unwrap();
        assert_eq!(conversation.turns.len(), 2);
        assert!(conversation.turns.iter().all(Turn::is_pending));
    }

    #[test]
    fn record_rejects_empty_message_and_unknown_id() {
        let (mut store, id) = store_with_conversation();
        assert!(
            store
                .record_user_message(&id, "  ")
                .unwrap_err()
                .is_invalid_input()
        );
        assert!(
            store
                .record_user_message("nope", "hi")
                .unwrap_err()
                .is_not_found()
        );
    }

    #[test]
    fn complete_fills_response_once() {
        let (mut store, id) = store_with_conversation();
        let index = store.record_user_message(&id, "hi").unwrap();

        store.complete_turn(&id, index, "hello!").unwrap();
        let turn = &store.get(&id).unwrap().turns[index];
        assert_eq!(turn.assistant_response.as_deref(), Some("hello!"));

        // Second completion is a protocol violation.
        assert!(
            store
                .complete_turn(&id, index, "again")
                .unwrap_err()
                .is_invalid_state()
        );
    }

    #[test]
    fn complete_unknown_turn_or_conversation_is_not_found() {
        let (mut store, id) = store_with_conversation();
        assert!(store.complete_turn(&id, 0, "x").unwrap_err().is_not_found());
        assert!(
            store
                .complete_turn("nope", 0, "x")
                .unwrap_err()
                .is_not_found()
        );
    }

    #[test]
    fn turns_never_shrink_or_reorder() {
        let (mut store, id) = store_with_conversation();
        for i in 0..5 {
            let index = store.record_user_message(&id, format!("u{i}").as_str()).unwrap();
            store.complete_turn(&id, index, format!("a{i}")).unwrap();
        }

        let users: Vec<_> = store
            .get(&id)
            .unwrap()
            .turns
            .iter()
            .map(|t| t.user_message.clone())
            .collect();
        assert_eq!(users, vec!["u0", "u1", "u2", "u3", "u4"]);
    }

    #[test]
    fn list_is_most_recent_first() {
        let mut store = ConversationStore::new();
        let a = store.create("first conversation").unwrap();
        let b = store.create("second conversation").unwrap();
        let c = store.create("third conversation").unwrap();

        let ids: Vec<_> = store.list().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![c, b, a]);
    }

    #[test]
    fn snapshot_round_trip_preserves_creation_order() {
        let mut store = ConversationStore::new();
        let a = store.create("alpha").unwrap();
        let b = store.create("beta").unwrap();

        let snapshot: Vec<_> = store.iter_in_creation_order().cloned().collect();
        let rebuilt = ConversationStore::from_snapshot(snapshot, TitlePolicy::default());

        let ids: Vec<_> = rebuilt
            .iter_in_creation_order()
            .map(|c| c.id.clone())
            .collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn rename_updates_title() {
        let (mut store, id) = store_with_conversation();
        store.rename(&id, "travel notes").unwrap();
        assert_eq!(store.get(&id).unwrap().title, "travel notes");
        assert!(store.rename(&id, " ").unwrap_err().is_invalid_input());
    }
}
