//! Timestamp reconciliation.
//!
//! Per-chunk transcripts carry chunk-relative word times. Reconciliation
//! adds each chunk's start offset, concatenates in chunk order, and
//! stable-sorts by absolute time. The stable sort matters: the service may
//! attribute a word slightly before the nominal chunk boundary, and that
//! must never reorder same-chunk words relative to each other.

use crate::asr::transcriber::{ChunkTranscript, WordToken};

/// Merge per-chunk transcripts into one absolute-time-ordered word list.
///
/// `chunk_len_secs` is the nominal chunk length; chunk i's offset is
/// `i * chunk_len_secs`.
pub fn merge(chunks: &[ChunkTranscript], chunk_len_secs: f64) -> Vec<WordToken> {
    let mut merged: Vec<WordToken> = chunks
        .iter()
        .flat_map(|chunk| {
            let offset = chunk.chunk_index as f64 * chunk_len_secs;
            chunk.words.iter().map(move |w| WordToken {
                text: w.text.clone(),
                start_secs: w.start_secs + offset,
            })
        })
        .collect();

    // Vec::sort_by is stable; ties keep chunk order then emission order.
    merged.sort_by(|a, b| a.start_secs.total_cmp(&b.start_secs));
    merged
}
