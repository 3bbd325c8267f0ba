//! Domain layer for the mnemo assistant backend.
//!
//! This crate holds the conversation memory subsystem's entity model and
//! pure logic: the in-memory conversation store, title derivation, global
//! memory-window assembly, training-example export, and the collaborator
//! traits the surrounding system plugs into. It performs no I/O; durability
//! and external services live in `mnemo-infrastructure`.

pub mod config;
pub mod conversation;
pub mod error;
pub mod inference;
pub mod memory;
pub mod speech;
pub mod training;

// Re-export common error type
pub use error::{MnemoError, Result};
