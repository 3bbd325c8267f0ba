//! Atomic persistence for the structured conversation store.
//!
//! The whole store is serialized as one pretty-printed JSON array and
//! written with a temp-file-then-rename strategy: a crash mid-write can
//! never leave a half-written `conversations.json` behind, only the old
//! snapshot or the new one.

use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use mnemo_core::{MnemoError, Result};

use crate::dto::ConversationDto;

/// Reads and writes the structured conversation store file.
pub struct JsonStoreCodec {
    path: PathBuf,
}

impl JsonStoreCodec {
    /// Creates a codec for the given store file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The store file this codec reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted conversation set.
    ///
    /// A missing file yields an empty set. An unreadable or unparseable
    /// file yields `CorruptStore`; callers downgrade that to an empty
    /// store with a surfaced warning rather than aborting startup.
    pub fn load(&self) -> Result<Vec<ConversationDto>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "store file absent, starting empty");
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(&self.path)
            .map_err(|e| MnemoError::corrupt_store(format!("unreadable store file: {e}")))?;

        let conversations: Vec<ConversationDto> = serde_json::from_str(&json)
            .map_err(|e| MnemoError::corrupt_store(format!("unparseable store file: {e}")))?;

        debug!(count = conversations.len(), "loaded conversation store");
        Ok(conversations)
    }

    /// Loads the persisted set, falling back to empty on corruption.
    ///
    /// The corruption is surfaced as a warning, never a crash.
    pub fn load_or_empty(&self) -> Vec<ConversationDto> {
        match self.load() {
            Ok(conversations) => conversations,
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "conversation store is corrupt, starting with an empty store"
                );
                Vec::new()
            }
        }
    }

    /// Durably writes the full conversation set.
    ///
    /// Writes to a temporary file in the same directory, fsyncs it, then
    /// atomically renames it over the target. Serialization is stable, so
    /// saving an unmodified loaded store reproduces the file byte for
    /// byte.
    ///
    /// # Errors
    ///
    /// Returns `Io` when the filesystem rejects the write; callers treat
    /// this as non-fatal and catch up on the next mutation.
    pub fn save(&self, conversations: &[ConversationDto]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(conversations)
            .map_err(|e| MnemoError::io(format!("serialize store: {e}")))?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.write_all(b"\n")?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        debug!(path = %self.path.display(), count = conversations.len(), "flushed conversation store");
        Ok(())
    }

    /// Temporary file path used for atomic writes.
    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| MnemoError::io("store path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| MnemoError::io("store path has no file name"))?;
        Ok(parent.join(format!(".{file_name}.tmp")))
    }
}
