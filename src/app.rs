//! Transcribe-and-translate application entry point.
//!
//! Orchestrates the complete flow:
//! decode → chunk → transcribe (language-gated) → reconcile → paragraphs
//! → translate → write.

use crate::artifact;
use crate::asr::google::GoogleSpeechClient;
use crate::asr::language::LanguageResolver;
use crate::asr::transcriber::{ChunkTranscript, SpeechTranscriber};
use crate::audio::{decoder, segmenter};
use crate::config::Config;
use crate::credentials;
use crate::error::{Result, ScribeError};
use crate::transcript::{paragraphs, reconcile};
use crate::translate::google::GoogleTranslateClient;
use crate::translate::sentinel;
use crate::translate::translator::Translator;
use std::path::PathBuf;

/// Everything one run needs, after config/CLI layering.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub input: PathBuf,
    pub credentials: PathBuf,
    pub out_dir: PathBuf,
    /// Explicit source language; absent triggers detection on chunk 0.
    pub language: Option<String>,
    pub target_language: String,
    pub pause_secs: f64,
    pub chunk_length_ms: u64,
    pub keep_intermediate: bool,
    pub overwrite: bool,
    pub quiet: bool,
    pub verbose: u8,
}

/// What a completed run produced, for the end-of-run summary and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub output_path: PathBuf,
    pub language: String,
    pub chunk_count: usize,
    pub chunk_word_counts: Vec<usize>,
}

/// Run the translate command with the real remote clients.
pub async fn run_translate_command(config: &Config, options: PipelineOptions) -> Result<()> {
    let transcriber = GoogleSpeechClient::new(&config.service.asr_endpoint);
    let translator = GoogleTranslateClient::new(&config.service.translate_endpoint);

    let summary = run_pipeline(&transcriber, &translator, &options).await?;

    if !options.quiet {
        eprintln!("Translation saved to {}", summary.output_path.display());
    }
    Ok(())
}

/// Run the full pipeline against any transcriber/translator pair.
///
/// Pre-flight validation happens first and aborts before any decode work or
/// remote call. Service failures are fatal: there is no retry and no
/// checkpoint, so a late failure discards all transcription progress from
/// this run.
pub async fn run_pipeline(
    transcriber: &dyn SpeechTranscriber,
    translator: &dyn Translator,
    options: &PipelineOptions,
) -> Result<RunSummary> {
    if options.chunk_length_ms == 0 {
        return Err(ScribeError::Other(
            "chunk length must be positive".to_string(),
        ));
    }

    let output_path = artifact::preflight(
        &options.input,
        &options.credentials,
        &options.out_dir,
        options.overwrite,
    )?;
    credentials::init(&options.credentials)?;

    let format = decoder::InputFormat::from_path(&options.input)?;
    if !options.quiet {
        eprintln!("Decoding {}...", options.input.display());
    }
    let samples = decoder::decode(&options.input)?;

    // Working copy of the decoded stream, for inputs that needed conversion.
    let working_copy = if format.requires_conversion() {
        let stem = options
            .input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("input");
        let path = options.out_dir.join(format!("{stem}.wav"));
        decoder::write_wav_copy(&samples, &path)?;
        Some(path)
    } else {
        None
    };

    let chunks = segmenter::segment(&samples, options.chunk_length_ms);
    let chunk_count = chunks.len();
    drop(samples);
    if !options.quiet {
        eprintln!("Split audio into {} chunks", chunk_count);
    }

    // Sequential transcription. Chunk 0 gates the rest when the language
    // still has to be detected; afterwards chunks only run serially for
    // simplicity, not because of any data dependency.
    let mut resolver = LanguageResolver::new(options.language.clone());
    let mut transcripts: Vec<ChunkTranscript> = Vec::with_capacity(chunk_count);
    let mut chunk_word_counts = Vec::with_capacity(chunk_count);

    for chunk in chunks {
        let language = resolver.current().to_string();
        if options.verbose >= 1 {
            eprintln!(
                "Transcribing chunk {}/{} ({})...",
                chunk.index + 1,
                chunk_count,
                language
            );
        }

        // `chunk` is consumed here; its samples are released once the call
        // returns, on success and on failure alike.
        let transcript = transcriber.transcribe_chunk(&chunk, &language).await?;
        if transcript.chunk_index == 0 {
            resolver.observe_first_chunk(&transcript, translator).await?;
        }

        chunk_word_counts.push(transcript.words.len());
        transcripts.push(transcript);
    }

    let chunk_len_secs = options.chunk_length_ms as f64 / 1000.0;
    let merged = reconcile::merge(&transcripts, chunk_len_secs);
    let text = paragraphs::assemble(&merged, options.pause_secs);

    if let Some(working) = &working_copy {
        let retained = artifact::retain_or_remove(working, &options.out_dir, options.keep_intermediate)?;
        if let Some(path) = retained
            && !options.quiet
        {
            eprintln!("Intermediate audio copy saved to {}", path.display());
        }
    }

    if !options.quiet {
        eprintln!("Translating to '{}'...", options.target_language);
    }
    let translated =
        sentinel::translate_preserving_paragraphs(translator, text.trim(), &options.target_language)
            .await?;

    artifact::write(&translated, &output_path)?;

    let summary = RunSummary {
        output_path,
        language: resolver.current().to_string(),
        chunk_count,
        chunk_word_counts,
    };
    print_summary(options, &summary);
    Ok(summary)
}

fn print_summary(options: &PipelineOptions, summary: &RunSummary) {
    if options.quiet {
        return;
    }
    eprintln!(
        "File name: {}",
        options
            .input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    );
    eprintln!("Source language: {}", summary.language);
    eprintln!("Number of chunks: {}", summary.chunk_count);
    if options.verbose >= 1 {
        for (i, count) in summary.chunk_word_counts.iter().enumerate() {
            eprintln!("Words in chunk {}: {}", i, count);
        }
    }
}
