//! Error types for songscribe.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScribeError {
    // Pre-flight validation errors (never touch the network)
    #[error("Audio file does not exist: {path}")]
    InputNotFound { path: String },

    #[error("Credentials file does not exist: {path}")]
    CredentialsNotFound { path: String },

    #[error("Output directory does not exist: {path}")]
    OutputDirNotFound { path: String },

    #[error("Output file already exists: {path} (pass --overwrite to replace it)")]
    OutputExists { path: String },

    #[error("Unsupported audio format: {path} (expected .wav or .mp3)")]
    UnsupportedFormat { path: String },

    // Audio decoding errors
    #[error("Failed to decode audio: {message}")]
    Decode { message: String },

    // Remote service errors (fatal, no retry)
    #[error("Transcription failed: {message}")]
    Transcription { message: String },

    #[error("Translation failed: {message}")]
    Translation { message: String },

    #[error("Language detection failed: {message}")]
    Detection { message: String },

    // Credentials errors
    #[error("Failed to read credentials: {message}")]
    Credentials { message: String },

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    // General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error for cases not covered above
    #[error("{0}")]
    Other(String),
}

// Type alias for convenience
pub type Result<T> = std::result::Result<T, ScribeError>;

impl ScribeError {
    /// True for errors caught by pre-flight validation, before any decode
    /// work or remote call has been issued.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ScribeError::InputNotFound { .. }
                | ScribeError::CredentialsNotFound { .. }
                | ScribeError::OutputDirNotFound { .. }
                | ScribeError::OutputExists { .. }
                | ScribeError::UnsupportedFormat { .. }
        )
    }
}
