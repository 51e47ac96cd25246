//! Transcriber trait and word-level transcript types.

use crate::audio::segmenter::AudioChunk;
use crate::error::{Result, ScribeError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// One recognized word with its start time in seconds.
///
/// `start_secs` is chunk-relative as emitted by the transcriber and becomes
/// absolute once the reconciler applies the owning chunk's offset.
#[derive(Debug, Clone, PartialEq)]
pub struct WordToken {
    pub text: String,
    pub start_secs: f64,
}

impl WordToken {
    pub fn new(text: &str, start_secs: f64) -> Self {
        Self {
            text: text.to_string(),
            start_secs,
        }
    }
}

/// The words of exactly one chunk, in service emission order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChunkTranscript {
    pub chunk_index: usize,
    pub words: Vec<WordToken>,
}

impl ChunkTranscript {
    /// Chunk text joined with single spaces, as fed to language detection.
    pub fn joined_text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Trait for per-chunk speech-to-text transcription.
///
/// This trait allows swapping implementations (real service vs mock).
/// An empty word list is a valid outcome for silent or unintelligible
/// chunks; a service failure is an error and is fatal to the run.
#[async_trait]
pub trait SpeechTranscriber: Send + Sync {
    /// Transcribe one chunk, returning chunk-relative word timestamps.
    async fn transcribe_chunk(&self, chunk: &AudioChunk, language: &str)
    -> Result<ChunkTranscript>;
}

/// Mock transcriber for testing.
///
/// Responses are keyed by chunk index; chunks with no registered response
/// transcribe to zero words (the silent-chunk outcome). Counts calls so
/// tests can assert that pre-flight failures issue no requests.
#[derive(Debug, Default)]
pub struct MockTranscriber {
    responses: HashMap<usize, Vec<WordToken>>,
    should_fail: bool,
    calls: AtomicUsize,
    languages_seen: std::sync::Mutex<Vec<String>>,
}

impl MockTranscriber {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the words returned for a chunk index.
    pub fn with_words(mut self, chunk_index: usize, words: Vec<WordToken>) -> Self {
        self.responses.insert(chunk_index, words);
        self
    }

    /// Configure the mock to fail on every call.
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    /// Number of transcription calls issued so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Language codes passed to each call, in order.
    pub fn languages_seen(&self) -> Vec<String> {
        self.languages_seen
            .lock()
            .map(|g| g.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl SpeechTranscriber for MockTranscriber {
    async fn transcribe_chunk(
        &self,
        chunk: &AudioChunk,
        language: &str,
    ) -> Result<ChunkTranscript> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut seen) = self.languages_seen.lock() {
            seen.push(language.to_string());
        }

        if self.should_fail {
            return Err(ScribeError::Transcription {
                message: "mock transcription failure".to_string(),
            });
        }

        Ok(ChunkTranscript {
            chunk_index: chunk.index,
            words: self.responses.get(&chunk.index).cloned().unwrap_or_default(),
        })
    }
}
