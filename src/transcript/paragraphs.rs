//! Paragraph reconstruction from word timing gaps.
//!
//! A gap larger than the pause threshold between the start times of two
//! consecutive words opens a new paragraph. Words join with single spaces
//! within a paragraph; paragraphs join with `"\n\n"`. A non-empty
//! transcript gets one trailing `"\n\n"` to normalize the translation
//! input; an empty transcript yields an empty string.

use crate::asr::transcriber::WordToken;
use crate::defaults::PARAGRAPH_BREAK;

/// Assemble the merged word sequence into paragraph-delimited text.
pub fn assemble(words: &[WordToken], pause_secs: f64) -> String {
    if words.is_empty() {
        return String::new();
    }

    let mut paragraphs: Vec<Vec<&str>> = vec![Vec::new()];
    let mut previous_start = words[0].start_secs;

    for word in words {
        if word.start_secs - previous_start > pause_secs {
            paragraphs.push(Vec::new());
        }
        // Paragraphs is never empty here.
        if let Some(current) = paragraphs.last_mut() {
            current.push(word.text.as_str());
        }
        previous_start = word.start_secs;
    }

    let mut text = paragraphs
        .iter()
        .map(|p| p.join(" "))
        .collect::<Vec<_>>()
        .join(PARAGRAPH_BREAK);
    text.push_str(PARAGRAPH_BREAK);
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(entries: &[(&str, f64)]) -> Vec<WordToken> {
        entries
            .iter()
            .map(|(text, at)| WordToken::new(text, *at))
            .collect()
    }

    #[test]
    fn gap_over_threshold_opens_exactly_one_paragraph() {
        // Gap 0.5 stays, gap 2.5 > 2.0 breaks.
        let text = assemble(&words(&[("w1", 0.0), ("w2", 0.5), ("w3", 3.0)]), 2.0);
        assert_eq!(text, "w1 w2\n\nw3\n\n");
    }

    #[test]
    fn gap_exactly_at_threshold_does_not_break() {
        let text = assemble(&words(&[("w1", 0.0), ("w2", 2.0)]), 2.0);
        assert_eq!(text, "w1 w2\n\n");
    }

    #[test]
    fn empty_transcript_yields_empty_output_without_marker() {
        assert_eq!(assemble(&[], 2.0), "");
    }

    #[test]
    fn single_word_gets_trailing_marker() {
        assert_eq!(assemble(&words(&[("solo", 4.2)]), 2.0), "solo\n\n");
    }

    #[test]
    fn multiple_breaks_form_multiple_paragraphs() {
        let text = assemble(
            &words(&[
                ("a", 0.0),
                ("b", 1.0),
                ("c", 10.0),
                ("d", 11.0),
                ("e", 20.0),
            ]),
            2.0,
        );
        assert_eq!(text, "a b\n\nc d\n\ne\n\n");
    }

    #[test]
    fn threshold_is_configurable() {
        let sequence = words(&[("a", 0.0), ("b", 3.0), ("c", 9.0)]);

        // Generous threshold: one paragraph.
        assert_eq!(assemble(&sequence, 10.0), "a b c\n\n");
        // Tight threshold: every word its own paragraph.
        assert_eq!(assemble(&sequence, 1.0), "a\n\nb\n\nc\n\n");
    }

    #[test]
    fn paragraph_count_matches_break_count_plus_one() {
        let text = assemble(
            &words(&[("a", 0.0), ("b", 5.0), ("c", 10.0), ("d", 15.0)]),
            2.0,
        );
        // Trailing marker adds one empty trailing segment on split.
        let segments: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(segments, vec!["a", "b", "c", "d", ""]);
    }
}
