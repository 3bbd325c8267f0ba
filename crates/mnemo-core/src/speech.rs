//! Speech-synthesis collaborator interface.
//!
//! Audio generation is entirely outside the core data model; the core only
//! defines the seam a presentation layer may speak responses through.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::Result;

/// An external text-to-speech collaborator.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Renders the given response text to an audio artifact and returns
    /// its path, or `None` when synthesis is disabled.
    async fn synthesize(&self, text: &str) -> Result<Option<PathBuf>>;
}
