//! Speech recognition: the transcriber seam, the remote client, and the
//! language-resolution gate.

pub mod google;
pub mod language;
pub mod transcriber;
