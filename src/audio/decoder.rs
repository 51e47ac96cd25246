//! Audio container decoding.
//!
//! WAV input is consumed directly via hound. MP3 input requires conversion:
//! it is decoded through rodio's symphonia backend and a WAV working copy of
//! the decoded stream is written next to the output (see `artifact` for the
//! retention rules). Either way the pipeline sees 16kHz mono i16 PCM.

use crate::defaults::SAMPLE_RATE;
use crate::error::{Result, ScribeError};
use std::path::Path;

/// Supported input containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Read directly.
    Wav,
    /// Decoded to an intermediate WAV working copy before chunking.
    Mp3,
}

impl InputFormat {
    /// Determine the container from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("wav") => Ok(InputFormat::Wav),
            Some("mp3") => Ok(InputFormat::Mp3),
            _ => Err(ScribeError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }

    /// Whether this container is decoded through an intermediate working copy.
    pub fn requires_conversion(&self) -> bool {
        matches!(self, InputFormat::Mp3)
    }
}

/// Decode an audio file to 16kHz mono i16 PCM.
pub fn decode(path: &Path) -> Result<Vec<i16>> {
    match InputFormat::from_path(path)? {
        InputFormat::Wav => decode_wav(path),
        InputFormat::Mp3 => decode_mp3(path),
    }
}

fn decode_wav(path: &Path) -> Result<Vec<i16>> {
    let mut reader = hound::WavReader::open(path).map_err(|e| ScribeError::Decode {
        message: format!("failed to parse WAV file: {}", e),
    })?;

    let spec = reader.spec();
    let raw_samples: Vec<i16> = reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| ScribeError::Decode {
            message: format!("failed to read WAV samples: {}", e),
        })?;

    let mono = downmix(&raw_samples, spec.channels);
    Ok(resample(&mono, spec.sample_rate, SAMPLE_RATE))
}

fn decode_mp3(path: &Path) -> Result<Vec<i16>> {
    use rodio::Source;

    let file = std::fs::File::open(path)?;
    let decoder = rodio::Decoder::try_from(file).map_err(|e| ScribeError::Decode {
        message: format!("failed to parse MP3 file: {}", e),
    })?;

    let source_rate = decoder.sample_rate();
    let channels = decoder.channels();
    if source_rate == 0 || channels == 0 {
        return Err(ScribeError::Decode {
            message: format!(
                "invalid MP3 stream parameters: {} Hz, {} channels",
                source_rate, channels
            ),
        });
    }

    let raw_samples: Vec<i16> = decoder
        .map(|s| (s * 32768.0).clamp(-32768.0, 32767.0) as i16)
        .collect();
    if raw_samples.is_empty() {
        return Err(ScribeError::Decode {
            message: "MP3 stream contains no audio frames".to_string(),
        });
    }

    let mono = downmix(&raw_samples, channels);
    Ok(resample(&mono, source_rate, SAMPLE_RATE))
}

/// Write a 16kHz mono WAV working copy of decoded samples.
pub fn write_wav_copy(samples: &[i16], path: &Path) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).map_err(|e| ScribeError::Decode {
        message: format!("failed to create WAV working copy: {}", e),
    })?;
    for &s in samples {
        writer.write_sample(s).map_err(|e| ScribeError::Decode {
            message: format!("failed to write WAV working copy: {}", e),
        })?;
    }
    writer.finalize().map_err(|e| ScribeError::Decode {
        message: format!("failed to finalize WAV working copy: {}", e),
    })?;
    Ok(())
}

/// Average interleaved frames down to one channel.
fn downmix(samples: &[i16], channels: u16) -> Vec<i16> {
    if channels <= 1 {
        return samples.to_vec();
    }
    let n = channels as usize;
    samples
        .chunks_exact(n)
        .map(|frame| {
            let sum: i32 = frame.iter().map(|&s| s as i32).sum();
            (sum / n as i32) as i16
        })
        .collect()
}

/// Simple linear interpolation resampling.
fn resample(samples: &[i16], from_rate: u32, to_rate: u32) -> Vec<i16> {
    if from_rate == to_rate {
        return samples.to_vec();
    }

    let ratio = from_rate as f64 / to_rate as f64;
    let output_len = (samples.len() as f64 / ratio).ceil() as usize;

    (0..output_len)
        .map(|i| {
            let source_pos = i as f64 * ratio;
            let source_idx = source_pos.floor() as usize;
            let fraction = source_pos - source_idx as f64;

            if source_idx + 1 >= samples.len() {
                samples[source_idx]
            } else {
                let left = samples[source_idx] as f64;
                let right = samples[source_idx + 1] as f64;
                (left + (right - left) * fraction) as i16
            }
        })
        .collect()
}
