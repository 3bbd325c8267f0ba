//! Speech collaborator stub.
//!
//! Audio generation is outside this tool's scope; the stub satisfies the
//! collaborator seam so a real synthesizer can be dropped in later.

use std::path::PathBuf;

use async_trait::async_trait;

use mnemo_core::Result;
use mnemo_core::speech::SpeechSynthesizer;

/// A synthesizer that produces no audio.
pub struct NoopSpeech;

#[async_trait]
impl SpeechSynthesizer for NoopSpeech {
    async fn synthesize(&self, _text: &str) -> Result<Option<PathBuf>> {
        Ok(None)
    }
}
