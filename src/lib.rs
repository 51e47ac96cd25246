//! songscribe - Transcribe audio recordings and translate them with
//! paragraph structure intact.
//!
//! Chunk → transcribe → reconcile → paragraphs → translate → write.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod artifact;
pub mod asr;
pub mod audio;
pub mod cli;
pub mod config;
pub mod credentials;
pub mod defaults;
pub mod error;
pub mod transcript;
pub mod translate;

// Composition root - needs everything
pub mod app;

// Service seams (real clients vs mocks)
pub use asr::transcriber::{ChunkTranscript, SpeechTranscriber, WordToken};
pub use translate::translator::Translator;

// Pipeline
pub use app::{PipelineOptions, RunSummary, run_pipeline, run_translate_command};

// Error handling
pub use error::{Result, ScribeError};

// Config
pub use config::Config;
