//! Fixed-duration audio chunking.
//!
//! A recording of duration D seconds and chunk length L seconds becomes
//! ⌈D/L⌉ contiguous, non-overlapping chunks covering [0, D) exactly once.
//! Every chunk except possibly the last has duration exactly L.

use crate::defaults::SAMPLE_RATE;

/// One contiguous slice of the input recording.
///
/// `start_secs` is always `index * chunk_len_secs`; samples are 16kHz mono
/// i16 PCM. The encoded payload exists only for the duration of the chunk's
/// recognition call.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioChunk {
    pub index: usize,
    pub start_secs: f64,
    pub samples: Vec<i16>,
}

impl AudioChunk {
    /// Duration of this chunk in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / SAMPLE_RATE as f64
    }

    /// Encode the samples as raw little-endian 16-bit PCM (LINEAR16),
    /// the wire format of the recognition request.
    pub fn pcm_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.samples.len() * 2);
        for &s in &self.samples {
            bytes.extend_from_slice(&s.to_le_bytes());
        }
        bytes
    }
}

/// Split a decoded sample buffer into fixed-duration chunks.
///
/// `chunk_length_ms` must be positive (validated at the configuration
/// boundary). An empty buffer yields no chunks.
pub fn segment(samples: &[i16], chunk_length_ms: u64) -> Vec<AudioChunk> {
    let chunk_samples = (chunk_length_ms as usize * SAMPLE_RATE as usize) / 1000;
    let chunk_len_secs = chunk_length_ms as f64 / 1000.0;

    samples
        .chunks(chunk_samples.max(1))
        .enumerate()
        .map(|(index, chunk)| AudioChunk {
            index,
            start_secs: index as f64 * chunk_len_secs,
            samples: chunk.to_vec(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples_for_secs(secs: f64) -> Vec<i16> {
        vec![0i16; (secs * SAMPLE_RATE as f64) as usize]
    }

    #[test]
    fn chunk_count_is_ceil_of_duration_over_length() {
        // 150s at 60s chunks -> 3 chunks
        let chunks = segment(&samples_for_secs(150.0), 60_000);
        assert_eq!(chunks.len(), 3);

        // 120s at 60s chunks -> exactly 2 (no empty trailing chunk)
        let chunks = segment(&samples_for_secs(120.0), 60_000);
        assert_eq!(chunks.len(), 2);

        // 1s at 60s chunks -> 1
        let chunks = segment(&samples_for_secs(1.0), 60_000);
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn chunks_partition_input_with_no_gaps_or_overlaps() {
        let input: Vec<i16> = (0..SAMPLE_RATE as usize * 150)
            .map(|i| (i % 1000) as i16)
            .collect();
        let chunks = segment(&input, 60_000);

        let total: usize = chunks.iter().map(|c| c.samples.len()).sum();
        assert_eq!(total, input.len());

        let rejoined: Vec<i16> = chunks.iter().flat_map(|c| c.samples.clone()).collect();
        assert_eq!(rejoined, input);
    }

    #[test]
    fn all_chunks_but_last_have_nominal_duration() {
        let chunks = segment(&samples_for_secs(150.0), 60_000);
        assert_eq!(chunks[0].duration_secs(), 60.0);
        assert_eq!(chunks[1].duration_secs(), 60.0);
        assert_eq!(chunks[2].duration_secs(), 30.0);
    }

    #[test]
    fn start_offsets_are_index_times_chunk_length() {
        let chunks = segment(&samples_for_secs(150.0), 60_000);
        assert_eq!(chunks[0].start_secs, 0.0);
        assert_eq!(chunks[1].start_secs, 60.0);
        assert_eq!(chunks[2].start_secs, 120.0);

        for (i, chunk) in chunks.iter().enumerate() {
            assert_eq!(chunk.index, i);
        }
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        assert!(segment(&[], 60_000).is_empty());
    }

    #[test]
    fn short_chunk_length_partitions_finely() {
        // 2.5s at 1s chunks -> 3 chunks, last one 0.5s
        let chunks = segment(&samples_for_secs(2.5), 1_000);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[2].duration_secs(), 0.5);
        assert_eq!(chunks[2].start_secs, 2.0);
    }

    #[test]
    fn pcm_bytes_are_little_endian_pairs() {
        let chunk = AudioChunk {
            index: 0,
            start_secs: 0.0,
            samples: vec![0x0102i16, -1],
        };
        assert_eq!(chunk.pcm_bytes(), vec![0x02, 0x01, 0xFF, 0xFF]);
    }
}
