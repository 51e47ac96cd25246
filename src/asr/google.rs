//! Remote speech recognition client.
//!
//! Posts one synchronous `speech:recognize` request per chunk with word
//! time offsets enabled. The encoded audio payload lives only for the
//! duration of the call. Failures are fatal to the run; there is no retry.

use crate::asr::transcriber::{ChunkTranscript, SpeechTranscriber, WordToken};
use crate::audio::segmenter::AudioChunk;
use crate::credentials;
use crate::defaults::SAMPLE_RATE;
use crate::error::{Result, ScribeError};
use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};

pub struct GoogleSpeechClient {
    endpoint: String,
    client: reqwest::Client,
}

impl GoogleSpeechClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[derive(Serialize)]
struct RecognizeRequest {
    config: RecognitionConfig,
    audio: RecognitionAudio,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecognitionConfig {
    encoding: &'static str,
    sample_rate_hertz: u32,
    language_code: String,
    enable_word_time_offsets: bool,
}

#[derive(Serialize)]
struct RecognitionAudio {
    content: String,
}

#[derive(Deserialize)]
struct RecognizeResponse {
    #[serde(default)]
    results: Vec<SpeechResult>,
}

#[derive(Deserialize)]
struct SpeechResult {
    #[serde(default)]
    alternatives: Vec<SpeechAlternative>,
}

#[derive(Deserialize)]
struct SpeechAlternative {
    #[serde(default)]
    words: Vec<WordInfo>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WordInfo {
    word: String,
    start_time: Option<String>,
}

/// Parse a protobuf duration string like `"5.500s"` into seconds.
///
/// A missing offset means the word starts at the chunk origin.
fn parse_offset_secs(offset: Option<&str>) -> Result<f64> {
    let Some(raw) = offset else {
        return Ok(0.0);
    };
    raw.strip_suffix('s')
        .and_then(|v| v.parse::<f64>().ok())
        .ok_or_else(|| ScribeError::Transcription {
            message: format!("unparseable word time offset: {:?}", raw),
        })
}

#[async_trait]
impl SpeechTranscriber for GoogleSpeechClient {
    async fn transcribe_chunk(
        &self,
        chunk: &AudioChunk,
        language: &str,
    ) -> Result<ChunkTranscript> {
        let key = credentials::api_key()?;
        let content = base64::engine::general_purpose::STANDARD.encode(chunk.pcm_bytes());

        let request = RecognizeRequest {
            config: RecognitionConfig {
                encoding: "LINEAR16",
                sample_rate_hertz: SAMPLE_RATE,
                language_code: language.to_string(),
                enable_word_time_offsets: true,
            },
            audio: RecognitionAudio { content },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| ScribeError::Transcription {
                message: format!("recognition request failed: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(ScribeError::Transcription {
                message: format!("speech service returned status {}", response.status()),
            });
        }

        let body: RecognizeResponse =
            response.json().await.map_err(|e| ScribeError::Transcription {
                message: format!("failed to parse recognition response: {e}"),
            })?;

        // A response with no results is the valid silent-chunk outcome.
        let mut words = Vec::new();
        for result in body.results {
            for alternative in result.alternatives {
                for info in alternative.words {
                    words.push(WordToken {
                        start_secs: parse_offset_secs(info.start_time.as_deref())?,
                        text: info.word,
                    });
                }
            }
        }

        Ok(ChunkTranscript {
            chunk_index: chunk.index,
            words,
        })
    }
}
