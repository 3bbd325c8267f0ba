//! Data Transfer Objects (DTOs) for persistence.
//!
//! These DTOs represent the on-disk schema of the structured conversation
//! store: a JSON array of conversation objects whose `turns` are 2-element
//! `[user, assistant]` arrays. Only completed turns cross this boundary.
//! A pending turn is never serialized, so it cannot exist on the way back
//! in either.

use serde::{Deserialize, Serialize};

use mnemo_core::conversation::{Conversation, Turn};

/// One conversation as written to `conversations.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationDto {
    /// Unique conversation identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Completed turns as `[user, assistant]` pairs, oldest first.
    pub turns: Vec<(String, String)>,
}

impl From<&Conversation> for ConversationDto {
    fn from(conversation: &Conversation) -> Self {
        Self {
            id: conversation.id.clone(),
            title: conversation.title.clone(),
            turns: conversation
                .completed_turns()
                .map(|turn| (turn.user, turn.assistant))
                .collect(),
        }
    }
}

impl From<ConversationDto> for Conversation {
    fn from(dto: ConversationDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            turns: dto
                .turns
                .into_iter()
                .map(|(user, assistant)| Turn {
                    user_message: user,
                    assistant_response: Some(assistant),
                })
                .collect(),
        }
    }
}

/// Snapshots every conversation in creation order, dropping pending turns.
pub fn snapshot(store: &mnemo_core::conversation::ConversationStore) -> Vec<ConversationDto> {
    store.iter_in_creation_order().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mnemo_core::conversation::ConversationStore;

    #[test]
    fn pending_turns_are_dropped_on_the_way_out() {
        let mut store = ConversationStore::new();
        let id = store.create("hello there").unwrap();
        let index = store.record_user_message(&id, "hi").unwrap();
        store.complete_turn(&id, index, "hello!").unwrap();
        store.record_user_message(&id, "still thinking").unwrap();

        let dtos = snapshot(&store);
        assert_eq!(dtos.len(), 1);
        assert_eq!(
            dtos[0].turns,
            vec![("hi".to_string(), "hello!".to_string())]
        );
    }

    #[test]
    fn serialized_snapshot_carries_no_pending_turn_text() {
        let mut store = ConversationStore::new();
        let id = store.create("hello there").unwrap();
        let index = store.record_user_message(&id, "hi").unwrap();
        store.complete_turn(&id, index, "hello!").unwrap();
        store.record_user_message(&id, "still thinking").unwrap();

        let json = serde_json::to_string(&snapshot(&store)).unwrap();
        assert!(json.contains("hello!"));
        assert!(!json.contains("still thinking"));
    }

    #[test]
    fn turns_serialize_as_two_element_arrays() {
        let dto = ConversationDto {
            id: "c1".to_string(),
            title: "greetings".to_string(),
            turns: vec![("hi".to_string(), "hello!".to_string())],
        };
        let json = serde_json::to_string(&dto).unwrap();
        assert_eq!(
            json,
            r#"{"id":"c1","title":"greetings","turns":[["hi","hello!"]]}"#
        );
    }

    #[test]
    fn dto_round_trips_into_completed_domain_turns() {
        let dto = ConversationDto {
            id: "c1".to_string(),
            title: "greetings".to_string(),
            turns: vec![("hi".to_string(), "hello!".to_string())],
        };
        let conversation: Conversation = dto.clone().into();
        assert!(conversation.turns.iter().all(Turn::is_complete));
        assert_eq!(ConversationDto::from(&conversation), dto);
    }
}
