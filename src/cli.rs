//! Command-line interface for songscribe
//!
//! Provides argument parsing using clap derive macros.

use clap::Parser;
use std::path::PathBuf;

/// Transcribe an audio recording and translate it with paragraph structure intact
#[derive(Parser, Debug)]
#[command(
    name = "songscribe",
    version,
    about = "Transcribe an audio recording and translate it with paragraph structure intact"
)]
pub struct Cli {
    /// Path to the audio file (.wav or .mp3)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Path to the service key file (JSON with an api_key field)
    #[arg(short = 'c', long, value_name = "PATH")]
    pub credentials: Option<PathBuf>,

    /// Source language code (e.g. 'de'). Detected from the first chunk when
    /// absent — but not reliably
    #[arg(short = 'l', long, value_name = "LANG")]
    pub language: Option<String>,

    /// Output directory (must exist)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Keep a copy of the intermediate audio file under <out-dir>/tempfiles/
    /// when the input needed conversion
    #[arg(short = 'k', long)]
    pub keep_intermediate: bool,

    /// Overwrite the output file if it already exists
    #[arg(short = 'x', long)]
    pub overwrite: bool,

    /// Pause between words (seconds) after which a paragraph break is
    /// inserted
    #[arg(short = 'p', long, value_name = "SECONDS")]
    pub pause: Option<f64>,

    /// Chunk length in milliseconds
    #[arg(long, value_name = "MS")]
    pub chunk_length: Option<u64>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress status output (quiet mode)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output (-v: per-chunk progress and word counts)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
