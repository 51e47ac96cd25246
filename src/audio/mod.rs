//! Audio input handling: container decoding and fixed-duration chunking.

pub mod decoder;
pub mod segmenter;
