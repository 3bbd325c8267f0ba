//! Infrastructure layer for the mnemo assistant backend.
//!
//! Owns everything that touches the outside world: the atomic JSON store
//! codec, the append-only training log, path and configuration resolution,
//! and the Ollama-backed inference client.

pub mod config_storage;
pub mod dto;
pub mod ollama;
pub mod paths;
pub mod store_codec;
pub mod training_log;

pub use dto::ConversationDto;
pub use ollama::OllamaClient;
pub use paths::MnemoPaths;
pub use store_codec::JsonStoreCodec;
pub use training_log::TrainingLog;
