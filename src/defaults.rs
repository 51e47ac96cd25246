//! Default configuration constants for songscribe.
//!
//! This module provides shared constants used across different configuration
//! types to ensure consistency and eliminate duplication.

/// Pipeline sample rate in Hz.
///
/// 16kHz mono is what the speech service expects for LINEAR16 payloads and
/// is the standard rate for speech recognition. All inputs are resampled to
/// this rate before chunking.
pub const SAMPLE_RATE: u32 = 16000;

/// Default chunk length in milliseconds.
///
/// One minute per chunk keeps each recognition request comfortably under the
/// service's synchronous-request duration limit.
pub const CHUNK_LENGTH_MS: u64 = 60_000;

/// Default pause threshold in seconds.
///
/// A gap of more than this many seconds between the start times of two
/// consecutive words opens a new paragraph.
pub const PAUSE_SECONDS: f64 = 2.0;

/// Language hint used for the first chunk when no language code was given.
///
/// The detected language (from the first chunk's text) replaces this for all
/// remaining chunks; the first chunk itself is never re-transcribed.
pub const DEFAULT_LANGUAGE_HINT: &str = "en-US";

/// Default translation target language code.
pub const TARGET_LANGUAGE: &str = "en";

/// Suffix appended to the input file stem to form the output file name.
pub const TRANSLATED_SUFFIX: &str = "_translated.txt";

/// Subdirectory of the output directory where retained intermediate audio
/// copies are placed.
pub const TEMPFILES_DIR: &str = "tempfiles";

/// Paragraph break marker used in assembled transcripts.
pub const PARAGRAPH_BREAK: &str = "\n\n";

/// Sentinel substituted for paragraph breaks around the translation call.
///
/// Chosen to be unlikely to occur naturally and unlikely to be altered by
/// the translation service. Best effort only: a service that translates or
/// reorders the token will corrupt paragraph structure, and that is not
/// detected at runtime.
pub const PARAGRAPH_SENTINEL: &str = " [NEWLINE] ";

/// Recognition endpoint of the speech service.
pub const ASR_ENDPOINT: &str = "https://speech.googleapis.com/v1/speech:recognize";

/// Translation endpoint. Language detection lives under `/detect`.
pub const TRANSLATE_ENDPOINT: &str = "https://translation.googleapis.com/language/translate/v2";
