//! Translation: the translator seam, the remote client, and the
//! structure-preserving sentinel transform.

pub mod google;
pub mod sentinel;
pub mod translator;
