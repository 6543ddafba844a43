//! # Text Utilities
//!
//! Line- and sentence-level helpers shared by the detectors. All slicing is
//! character-based so arbitrary UTF-8 input (trademark glyphs, superscript
//! reference marks, daggers) can never split a code point.

use once_cell::sync::Lazy;
use regex::Regex;

/// Superscript digits or bracketed numerals used as reference marks.
pub(crate) static REF_MARK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[¹²³⁴⁵⁶⁷⁸⁹⁰]|\[\d+\]").expect("reference mark pattern"));

/// True when the text carries at least one reference mark.
pub(crate) fn has_reference_mark(text: &str) -> bool {
    REF_MARK.is_match(text)
}

/// First `max` characters of `text`.
pub(crate) fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Last `max` characters of `text`.
pub(crate) fn tail_window(text: &str, max: usize) -> &str {
    let total = text.chars().count();
    if total <= max {
        return text;
    }
    text.char_indices()
        .nth(total - max)
        .map(|(idx, _)| &text[idx..])
        .unwrap_or(text)
}

/// Split a line into sentences at whitespace runs that follow sentence
/// punctuation. The punctuation stays attached to the preceding sentence.
pub(crate) fn split_sentences(line: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = line.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if ch.is_whitespace() && matches!(prev, Some('.') | Some('!') | Some('?')) {
            sentences.push(&line[start..idx]);
            let mut next_start = idx + ch.len_utf8();
            while let Some(&(peek_idx, peek_ch)) = chars.peek() {
                if peek_ch.is_whitespace() {
                    chars.next();
                    next_start = peek_idx + peek_ch.len_utf8();
                } else {
                    break;
                }
            }
            start = next_start;
            prev = None;
        } else {
            prev = Some(ch);
        }
    }

    if start < line.len() {
        sentences.push(&line[start..]);
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentences_split_on_terminal_punctuation() {
        assert_eq!(
            split_sentences("First claim. Second claim! Third?"),
            vec!["First claim.", "Second claim!", "Third?"]
        );
    }

    #[test]
    fn interior_whitespace_without_punctuation_does_not_split() {
        assert_eq!(
            split_sentences("A 4.5 mm diffractive zone"),
            vec!["A 4.5 mm diffractive zone"]
        );
    }

    #[test]
    fn multiple_spaces_after_period() {
        assert_eq!(split_sentences("One.   Two."), vec!["One.", "Two."]);
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("Lens®™", 5), "Lens®");
        assert_eq!(truncate_chars("short", 100), "short");
    }

    #[test]
    fn tail_window_takes_last_chars() {
        assert_eq!(tail_window("abcdef", 3), "def");
        assert_eq!(tail_window("ab", 10), "ab");
        assert_eq!(tail_window("x®y®z", 2), "®z");
    }

    #[test]
    fn reference_marks() {
        assert!(has_reference_mark("superior comfort[3]"));
        assert!(has_reference_mark("superior comfort¹"));
        assert!(!has_reference_mark("superior comfort"));
        assert!(!has_reference_mark("[note]"));
    }
}
