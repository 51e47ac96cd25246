//! Transcript assembly: timestamp reconciliation and paragraph
//! reconstruction.

pub mod paragraphs;
pub mod reconcile;
