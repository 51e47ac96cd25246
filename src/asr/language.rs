//! Language resolution.
//!
//! An explicitly supplied code wins for every chunk. Otherwise chunk 0 is
//! transcribed with the default hint and language detection runs on its
//! text; the detected code applies to all remaining chunks. The detected
//! code is never applied retroactively to chunk 0.
//!
//! This is the pipeline's one forced ordering rule: while detection is
//! pending, no chunk after 0 may be transcribed.

use crate::asr::transcriber::ChunkTranscript;
use crate::defaults::DEFAULT_LANGUAGE_HINT;
use crate::error::Result;
use crate::translate::translator::Translator;

#[derive(Debug)]
pub struct LanguageResolver {
    explicit: Option<String>,
    detected: Option<String>,
}

impl LanguageResolver {
    pub fn new(explicit: Option<String>) -> Self {
        Self {
            explicit: explicit.filter(|c| !c.is_empty()),
            detected: None,
        }
    }

    /// The language code to use for the next transcription call.
    pub fn current(&self) -> &str {
        self.explicit
            .as_deref()
            .or(self.detected.as_deref())
            .unwrap_or(DEFAULT_LANGUAGE_HINT)
    }

    /// Whether transcription of later chunks is gated on chunk 0.
    pub fn needs_detection(&self) -> bool {
        self.explicit.is_none() && self.detected.is_none()
    }

    /// Run detection on the first chunk's text, if still needed.
    ///
    /// A silent first chunk leaves the default hint in force; detection is
    /// not re-attempted on later chunks.
    pub async fn observe_first_chunk(
        &mut self,
        transcript: &ChunkTranscript,
        detector: &dyn Translator,
    ) -> Result<()> {
        if !self.needs_detection() || transcript.words.is_empty() {
            return Ok(());
        }

        let detected = detector.detect_language(&transcript.joined_text()).await?;
        self.detected = Some(detected);
        Ok(())
    }
}
