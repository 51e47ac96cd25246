//! Translator trait.
//!
//! The translation service also provides language detection; both live on
//! one trait because they share a client, credentials, and failure mode.

use crate::error::{Result, ScribeError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Trait for text translation and language detection.
///
/// This trait allows swapping implementations (real service vs mock).
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate flat text into the target language.
    async fn translate(&self, text: &str, target_language: &str) -> Result<String>;

    /// Detect the dominant language of a text sample, returning its code.
    async fn detect_language(&self, text: &str) -> Result<String>;
}

/// Mock translator for testing.
///
/// By default translation is the identity transform, which is what the
/// sentinel round-trip property needs. Counts calls per operation so tests
/// can assert that pre-flight failures issue no requests.
#[derive(Debug, Default)]
pub struct MockTranslator {
    translation: Option<String>,
    detected_language: Option<String>,
    should_fail: bool,
    translate_calls: AtomicUsize,
    detect_calls: AtomicUsize,
}

impl MockTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a fixed translation instead of echoing the input.
    pub fn with_translation(mut self, text: &str) -> Self {
        self.translation = Some(text.to_string());
        self
    }

    /// Return a fixed detected language (default: "en").
    pub fn with_detected_language(mut self, code: &str) -> Self {
        self.detected_language = Some(code.to_string());
        self
    }

    /// Configure the mock to fail on every call.
    pub fn with_failure(mut self) -> Self {
        self.should_fail = true;
        self
    }

    pub fn translate_calls(&self) -> usize {
        self.translate_calls.load(Ordering::SeqCst)
    }

    pub fn detect_calls(&self) -> usize {
        self.detect_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, text: &str, _target_language: &str) -> Result<String> {
        self.translate_calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            return Err(ScribeError::Translation {
                message: "mock translation failure".to_string(),
            });
        }
        Ok(self
            .translation
            .clone()
            .unwrap_or_else(|| text.to_string()))
    }

    async fn detect_language(&self, _text: &str) -> Result<String> {
        self.detect_calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            return Err(ScribeError::Detection {
                message: "mock detection failure".to_string(),
            });
        }
        Ok(self
            .detected_language
            .clone()
            .unwrap_or_else(|| "en".to_string()))
    }
}
