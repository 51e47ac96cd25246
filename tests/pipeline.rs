//! End-to-end pipeline tests against mock services.
//!
//! Covers the pre-flight abort property (zero remote calls) and the full
//! chunk → transcribe → reconcile → paragraphs → translate → write flow.

use songscribe::app::{PipelineOptions, run_pipeline};
use songscribe::asr::transcriber::{MockTranscriber, WordToken};
use songscribe::error::ScribeError;
use songscribe::translate::translator::MockTranslator;
use std::path::Path;

/// Write a silent 16kHz mono WAV of the given duration.
fn write_wav(path: &Path, secs: f64) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for _ in 0..(secs * 16000.0) as usize {
        writer.write_sample(0i16).unwrap();
    }
    writer.finalize().unwrap();
}

fn options(dir: &Path, input: &Path) -> PipelineOptions {
    let credentials = dir.join("key.json");
    if !credentials.exists() {
        std::fs::write(&credentials, r#"{"api_key": "test-key"}"#).unwrap();
    }
    PipelineOptions {
        input: input.to_path_buf(),
        credentials,
        out_dir: dir.to_path_buf(),
        language: None,
        target_language: "en".to_string(),
        pause_secs: 2.0,
        chunk_length_ms: 60_000,
        keep_intermediate: false,
        overwrite: false,
        quiet: true,
        verbose: 0,
    }
}

#[tokio::test]
async fn existing_output_aborts_before_any_service_call() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("song.wav");
    write_wav(&input, 1.0);
    std::fs::write(dir.path().join("song_translated.txt"), "previous run").unwrap();

    let transcriber = MockTranscriber::new();
    let translator = MockTranslator::new();

    let result = run_pipeline(&transcriber, &translator, &options(dir.path(), &input)).await;

    assert!(matches!(result, Err(ScribeError::OutputExists { .. })));
    assert_eq!(transcriber.calls(), 0);
    assert_eq!(translator.translate_calls(), 0);
    assert_eq!(translator.detect_calls(), 0);
    // The earlier artifact is untouched.
    assert_eq!(
        std::fs::read_to_string(dir.path().join("song_translated.txt")).unwrap(),
        "previous run"
    );
}

#[tokio::test]
async fn end_to_end_three_chunks_with_detection() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("konzert.wav");
    // 150s at 60s chunks -> 3 chunks with offsets 0, 60, 120.
    write_wav(&input, 150.0);

    let transcriber = MockTranscriber::new()
        .with_words(
            0,
            vec![WordToken::new("hallo", 1.0), WordToken::new("welt", 1.5)],
        )
        .with_words(2, vec![WordToken::new("wort", 5.0)]);
    let translator = MockTranslator::new().with_detected_language("de");

    let summary = run_pipeline(&transcriber, &translator, &options(dir.path(), &input))
        .await
        .unwrap();

    assert_eq!(summary.chunk_count, 3);
    assert_eq!(summary.chunk_word_counts, vec![2, 0, 1]);
    assert_eq!(summary.language, "de");
    assert_eq!(summary.output_path, dir.path().join("konzert_translated.txt"));

    // Chunk 0 runs under the default hint; the detected code covers the rest.
    assert_eq!(transcriber.calls(), 3);
    assert_eq!(transcriber.languages_seen(), vec!["en-US", "de", "de"]);
    assert_eq!(translator.detect_calls(), 1);
    assert_eq!(translator.translate_calls(), 1);

    // The chunk-2 word at relative 5.0s lands at absolute 125.0s, which is
    // a > 2s gap after 1.5s: one paragraph break.
    let output = std::fs::read_to_string(&summary.output_path).unwrap();
    assert_eq!(output, "hallo welt\n\nwort");

    // WAV input needs no conversion: no working copy, no tempfiles dir.
    assert!(!dir.path().join("tempfiles").exists());
    assert!(!dir.path().join("konzert.wav.wav").exists());
}

#[tokio::test]
async fn explicit_language_skips_detection_entirely() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("chanson.wav");
    write_wav(&input, 90.0);

    let transcriber = MockTranscriber::new()
        .with_words(0, vec![WordToken::new("bonjour", 0.2)])
        .with_words(1, vec![WordToken::new("paris", 3.0)]);
    let translator = MockTranslator::new().with_detected_language("de");

    let mut opts = options(dir.path(), &input);
    opts.language = Some("fr".to_string());

    let summary = run_pipeline(&transcriber, &translator, &opts).await.unwrap();

    assert_eq!(summary.language, "fr");
    assert_eq!(transcriber.languages_seen(), vec!["fr", "fr"]);
    assert_eq!(translator.detect_calls(), 0);
}

#[tokio::test]
async fn transcription_failure_is_fatal_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("song.wav");
    write_wav(&input, 30.0);

    let transcriber = MockTranscriber::new().with_failure();
    let translator = MockTranslator::new();

    let result = run_pipeline(&transcriber, &translator, &options(dir.path(), &input)).await;

    assert!(matches!(result, Err(ScribeError::Transcription { .. })));
    assert_eq!(translator.translate_calls(), 0);
    assert!(!dir.path().join("song_translated.txt").exists());
}

#[tokio::test]
async fn fully_silent_recording_produces_empty_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("stille.wav");
    write_wav(&input, 70.0);

    // No registered words: every chunk transcribes to zero words, which is
    // a valid non-error outcome.
    let transcriber = MockTranscriber::new();
    let translator = MockTranslator::new().with_detected_language("de");

    let summary = run_pipeline(&transcriber, &translator, &options(dir.path(), &input))
        .await
        .unwrap();

    assert_eq!(summary.chunk_word_counts, vec![0, 0]);
    // A silent first chunk leaves the default hint in force.
    assert_eq!(summary.language, "en-US");
    assert_eq!(translator.detect_calls(), 0);

    let output = std::fs::read_to_string(&summary.output_path).unwrap();
    assert_eq!(output, "");
}

#[tokio::test]
async fn missing_input_fails_validation_without_service_calls() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.wav");

    let transcriber = MockTranscriber::new();
    let translator = MockTranslator::new();

    let result = run_pipeline(&transcriber, &translator, &options(dir.path(), &input)).await;

    match result {
        Err(e) => assert!(e.is_validation(), "expected validation error, got {e}"),
        Ok(_) => panic!("expected validation failure"),
    }
    assert_eq!(transcriber.calls(), 0);
    assert_eq!(translator.translate_calls(), 0);
}

#[tokio::test]
async fn overwrite_flag_replaces_existing_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("song.wav");
    write_wav(&input, 10.0);
    std::fs::write(dir.path().join("song_translated.txt"), "previous run").unwrap();

    let transcriber = MockTranscriber::new().with_words(0, vec![WordToken::new("neu", 0.5)]);
    let translator = MockTranslator::new();

    let mut opts = options(dir.path(), &input);
    opts.overwrite = true;
    opts.language = Some("de".to_string());

    let summary = run_pipeline(&transcriber, &translator, &opts).await.unwrap();

    let output = std::fs::read_to_string(&summary.output_path).unwrap();
    assert_eq!(output, "neu");
}
