//! Structure-preserving translation.
//!
//! The translation service operates on flat text and does not promise to
//! keep paragraph breaks intact. Every `"\n\n"` is therefore swapped for a
//! sentinel token before the single translation call and swapped back in
//! the translated output. This is a best-effort heuristic: a service that
//! translates, splits, or reorders the sentinel corrupts paragraph
//! structure, and that is not detected at runtime.

use crate::defaults::{PARAGRAPH_BREAK, PARAGRAPH_SENTINEL};
use crate::error::Result;
use crate::translate::translator::Translator;

/// Replace paragraph breaks with the sentinel token.
pub fn shield(text: &str) -> String {
    text.replace(PARAGRAPH_BREAK, PARAGRAPH_SENTINEL)
}

/// Replace surviving sentinel tokens back into paragraph breaks.
pub fn unshield(text: &str) -> String {
    text.replace(PARAGRAPH_SENTINEL, PARAGRAPH_BREAK)
}

/// Translate text in one call with paragraph breaks shielded.
pub async fn translate_preserving_paragraphs(
    translator: &dyn Translator,
    text: &str,
    target_language: &str,
) -> Result<String> {
    let shielded = shield(text);
    let translated = translator.translate(&shielded, target_language).await?;
    Ok(unshield(&translated))
}
