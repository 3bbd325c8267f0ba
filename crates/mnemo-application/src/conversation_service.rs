//! Stateful conversation store facade.
//!
//! `ConversationService` wraps the pure in-memory [`ConversationStore`] with
//! the durability and concurrency discipline the rest of the system relies
//! on: mutations serialize through one `RwLock`, every committed mutation is
//! followed by a flush of the full snapshot, and each turn completion is
//! exported to the training log exactly once.
//!
//! Flushing mutations take a dedicated flush mutex *before* the store
//! lock, so snapshots reach the disk in the same order their mutations
//! committed; the store lock itself is held only long enough to mutate and
//! capture a consistent snapshot, never across the file writes.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use mnemo_core::Result;
use mnemo_core::conversation::{CompletedTurn, Conversation, ConversationStore, TitlePolicy};
use mnemo_core::memory::MemoryWindow;
use mnemo_core::training::TrainingRecord;
use mnemo_infrastructure::dto::snapshot;
use mnemo_infrastructure::{JsonStoreCodec, TrainingLog};

/// The conversation memory subsystem's public face.
///
/// Cheap to share: callers hold it behind `Arc` and invoke operations
/// concurrently from multiple UI sessions.
pub struct ConversationService {
    state: Arc<RwLock<ConversationStore>>,
    /// Serializes flushes so concurrent completions never interleave
    /// their writes to the store file or the training log.
    flush_lock: Mutex<()>,
    codec: JsonStoreCodec,
    training_log: TrainingLog,
    window: MemoryWindow,
}

impl ConversationService {
    /// Opens the service: loads the persisted snapshot (empty store on a
    /// missing or corrupt file, with the corruption surfaced as a warning)
    /// and wires the durable sinks.
    pub fn open(
        codec: JsonStoreCodec,
        training_log: TrainingLog,
        title_policy: TitlePolicy,
        memory_window: usize,
    ) -> Self {
        let conversations = codec
            .load_or_empty()
            .into_iter()
            .map(Conversation::from)
            .collect();
        let store = ConversationStore::from_snapshot(conversations, title_policy);
        info!(conversations = store.len(), "conversation store opened");

        Self {
            state: Arc::new(RwLock::new(store)),
            flush_lock: Mutex::new(()),
            codec,
            training_log,
            window: MemoryWindow::new(memory_window),
        }
    }

    /// Creates a new conversation from its opening message, persists the
    /// updated store, and returns the fresh id.
    pub async fn create_conversation(&self, opening_message: &str) -> Result<String> {
        let _flush = self.flush_lock.lock().await;
        let mut state = self.state.write().await;
        let id = state.create(opening_message)?;
        let snapshot = snapshot(&state);
        drop(state);

        self.flush(&snapshot);
        Ok(id)
    }

    /// Appends a pending turn and returns its index.
    ///
    /// The turn is immediately observable (UI echo) but not persisted until
    /// completed.
    pub async fn record_user_message(&self, conversation_id: &str, message: &str) -> Result<usize> {
        let mut state = self.state.write().await;
        state.record_user_message(conversation_id, message)
    }

    /// Completes a pending turn, persists the store, and appends exactly
    /// one training record.
    ///
    /// The two sinks are independent: a failure of either is logged and
    /// the in-memory state stays committed; the next successful flush
    /// catches the store file up.
    pub async fn complete_turn(
        &self,
        conversation_id: &str,
        turn_index: usize,
        response: &str,
    ) -> Result<()> {
        let _flush = self.flush_lock.lock().await;
        let mut state = self.state.write().await;
        state.complete_turn(conversation_id, turn_index, response)?;

        // The export happens precisely at the pending-to-complete
        // transition, which is one-way, so each turn is exported once.
        let record = TrainingRecord::from_turn(&state.get(conversation_id)?.turns[turn_index]);
        let snapshot = snapshot(&state);
        drop(state);

        self.flush(&snapshot);
        if let Some(record) = record {
            if let Err(e) = self.training_log.append(&record) {
                warn!(error = %e, "training record append failed, continuing");
            }
        }
        Ok(())
    }

    /// Renames a conversation and persists the updated store.
    pub async fn rename_conversation(&self, conversation_id: &str, title: &str) -> Result<()> {
        let _flush = self.flush_lock.lock().await;
        let mut state = self.state.write().await;
        state.rename(conversation_id, title)?;
        let snapshot = snapshot(&state);
        drop(state);

        self.flush(&snapshot);
        Ok(())
    }

    /// Lists `(id, title)` pairs, most-recently-created first.
    pub async fn list_conversations(&self) -> Vec<(String, String)> {
        self.state.read().await.list()
    }

    /// Returns a snapshot of one conversation.
    pub async fn get_conversation(&self, conversation_id: &str) -> Result<Conversation> {
        self.state.read().await.get(conversation_id).cloned()
    }

    /// Builds the bounded global context window for the next prompt.
    ///
    /// Pending turns are excluded, so a turn recorded but not yet
    /// completed never sees itself in its own context.
    pub async fn build_context(&self) -> Vec<CompletedTurn> {
        self.window.build(&*self.state.read().await)
    }

    /// Builds a context window with an explicit bound.
    pub async fn build_context_with(&self, max_turns: usize) -> Vec<CompletedTurn> {
        MemoryWindow::new(max_turns).build(&*self.state.read().await)
    }

    /// Completed turns of one conversation, oldest first.
    pub async fn completed_turns(&self, conversation_id: &str) -> Result<Vec<CompletedTurn>> {
        Ok(self
            .state
            .read()
            .await
            .get(conversation_id)?
            .completed_turns()
            .collect())
    }

    /// Writes a snapshot to the store file. Failures are logged, never
    /// propagated: the in-memory state remains correct for the session
    /// and the next successful write catches up the durable state.
    fn flush(&self, snapshot: &[mnemo_infrastructure::ConversationDto]) {
        if let Err(e) = self.codec.save(snapshot) {
            warn!(error = %e, "conversation store flush failed, will retry on next mutation");
        }
    }
}
