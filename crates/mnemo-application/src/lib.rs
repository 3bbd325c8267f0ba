//! Application layer for the mnemo assistant backend.
//!
//! Orchestrates the domain store and the infrastructure sinks into the
//! operations a presentation layer consumes: the [`ConversationService`]
//! facade and the per-turn [`ChatUseCase`].

pub mod chat_usecase;
pub mod conversation_service;

pub use chat_usecase::{ChatReply, ChatUseCase};
pub use conversation_service::ConversationService;
