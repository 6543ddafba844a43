//! # Claim Extraction
//!
//! Finds candidate promotional sentences: lines are filtered for headers,
//! footnotes, and reference-list entries, split into sentences, and kept
//! when any claim-indicator vocabulary matches. Candidates retain their
//! 1-based line number and the full line they came from.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::text::{split_sentences, truncate_chars};

/// A sentence flagged as making a promotional assertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimCandidate {
    /// The sentence text.
    pub text: String,
    /// 1-based line number in the source material.
    pub line: usize,
    /// The full (trimmed) line the sentence came from.
    pub context: String,
}

/// Vocabulary groups that mark a sentence as claimable.
const CLAIM_INDICATORS: &[&str] = &[
    // Marketing/benefit verbs
    r"provides|delivers|improves|reduces|enhances|offers|shows|demonstrates",
    r"clinically|proven|helps|enables|allows|supports|promotes|maintains|achieves",
    r"results|effective|capable|designed|made|formulated|treatment|solution|benefit|advantage|feature",
    // Comparative language
    r"better|superior|vs\.|versus|compared to|leading|breakthrough|innovation",
    // Absolute language
    r"\b(?:perfect|guaranteed|always|never|completely|totally|eliminates|cures|solves)\b",
    // Qualitative claims
    r"comfort|ease|gentle|soft|smooth|quality|premium|ultimate|exceptional|luxury",
    // Quantitative/statistical
    r"\d+%|\d+\s*(?:years?|months?|days?)|n=\d+",
    // Negation claims
    r"\bno longer\b|\bno need\b|\bwithout\b|\bovercome\b|\bno compromise\b|\bno risk\b",
    // Superlatives
    r"\bfirst\b|\bonly\b|\bfirst-and-only\b|\bunique\b|\blast\b",
];

static CLAIM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("(?i)(?:{})", CLAIM_INDICATORS.join("|")))
        .expect("claim indicator pattern")
});

/// Header, footnote, and reference-list line shapes that are never claims.
static SKIP_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^#+\s|^References?:|^Footnotes?:|^\*{1,2}|^[0-9]+\.\s*(?:https?://|In a clinical|Internal|Surface)",
    )
    .expect("skip line pattern")
});

/// Minimum character length for a line or sentence to be considered.
const MIN_LENGTH: usize = 15;

/// Extract all claim candidates from the material, in document order.
///
/// No deduplication: a sentence that appears twice is a candidate twice.
pub fn extract_claims(text: &str) -> Vec<ClaimCandidate> {
    let mut claims = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        let stripped = line.trim();

        if stripped.chars().count() < MIN_LENGTH {
            continue;
        }
        if SKIP_LINE.is_match(stripped) {
            continue;
        }

        for sentence in split_sentences(stripped) {
            let sentence = sentence.trim();
            if sentence.chars().count() > MIN_LENGTH && CLAIM_PATTERN.is_match(sentence) {
                claims.push(ClaimCandidate {
                    text: sentence.to_string(),
                    line: line_idx + 1,
                    context: stripped.to_string(),
                });
            }
        }
    }

    claims
}

/// Truncate a candidate snippet to the detector snippet limit.
pub(crate) fn snippet_of(candidate: &ClaimCandidate) -> String {
    truncate_chars(&candidate.text, 200).to_string()
}
