//! Conversation domain module.
//!
//! - `model`: core entities (`Conversation`, `Turn`, `CompletedTurn`)
//! - `store`: the in-memory authoritative conversation set
//! - `title`: title derivation for new conversations

mod model;
mod store;
mod title;

pub use model::{CompletedTurn, Conversation, Turn};
pub use store::ConversationStore;
pub use title::{TitlePolicy, derive_title};
