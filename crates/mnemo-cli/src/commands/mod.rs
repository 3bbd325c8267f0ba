pub mod chat;
pub mod list;
pub mod show;
