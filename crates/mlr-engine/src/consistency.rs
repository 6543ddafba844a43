//! # Consistency Checks
//!
//! Trademark-usage and contradiction heuristics. Trademark checking works
//! against the product names of the injected corpus; a document that mixes
//! the marked and unmarked form of one product gets a single warning
//! recommending the more frequent variant as canonical.

use once_cell::sync::Lazy;
use regex::Regex;

use mlr_core::{Issue, IssueKind, Location, Severity};
use mlr_corpus::ClaimCorpus;

use crate::text::truncate_chars;

static NEGATIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:not|no|never|cannot|lack|without|absent|missing|fails?)\b")
        .expect("negative lexicon pattern")
});

static POSITIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:improves?|reduces?|eliminates?|enhances?|provides?|delivers?)\b")
        .expect("positive lexicon pattern")
});

static SAFETY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bnot\s+(?:for|intended|recommended)\b").expect("safety shape pattern")
});

const TRADEMARK_GLYPH: char = '\u{00AE}';

/// Count case-insensitive occurrences of `needle` in `haystack_lower`,
/// optionally requiring or forbidding a trailing trademark glyph.
fn count_occurrences(haystack_lower: &str, needle_lower: &str, marked: bool) -> usize {
    haystack_lower
        .match_indices(needle_lower)
        .filter(|(idx, matched)| {
            let follows = haystack_lower[idx + matched.len()..].chars().next();
            let has_glyph = follows == Some(TRADEMARK_GLYPH);
            has_glyph == marked
        })
        .count()
}

/// Check trademark usage and contradictory lines across the document.
pub fn check_consistency(text: &str, corpus: &ClaimCorpus) -> Vec<Issue> {
    let mut issues = Vec::new();
    let text_lower = text.to_lowercase();

    // Trademark consistency, per known product.
    for (name, _) in corpus.products() {
        let name_lower = name.to_lowercase();
        let marked = count_occurrences(&text_lower, &name_lower, true);
        let unmarked = count_occurrences(&text_lower, &name_lower, false);

        if marked > 0 && unmarked > 0 {
            let canonical = if marked >= unmarked {
                format!("{name}{TRADEMARK_GLYPH}")
            } else {
                name.to_string()
            };
            issues.push(
                Issue::new(
                    IssueKind::InconsistentTrademark,
                    Severity::Warning,
                    Location::DocumentWide,
                    "Product name trademarked inconsistently throughout document",
                    format!("Use '{canonical}' consistently throughout (pick one form and keep it consistent)"),
                )
                .with_snippet("Product name formatting varies"),
            );
        }
    }

    // Contradiction heuristic, per line.
    for (line_idx, line) in text.lines().enumerate() {
        if !NEGATIVE.is_match(line) || !POSITIVE.is_match(line) {
            continue;
        }
        let lead = truncate_chars(&line.to_lowercase(), 20).to_string();
        if lead.contains("not") {
            continue;
        }
        if SAFETY_SHAPE.is_match(line) {
            continue;
        }
        issues.push(
            Issue::new(
                IssueKind::ContradictoryStatement,
                Severity::Warning,
                Location::Line(line_idx + 1),
                "Line contains both positive and negative claims that may contradict",
                "Clarify the statement - ensure positive and negative elements are not contradictory",
            )
            .with_snippet(truncate_chars(line.trim(), 200)),
        );
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> &'static ClaimCorpus {
        ClaimCorpus::builtin()
    }

    #[test]
    fn mixed_trademark_forms_produce_one_warning() {
        let text = "Total 30 Contact Lens® fits most wearers. Total 30 Contact Lens comes in a toric variant.";
        let issues = check_consistency(text, corpus());
        let trademark: Vec<_> = issues
            .iter()
            .filter(|i| i.kind == IssueKind::InconsistentTrademark)
            .collect();
        assert_eq!(trademark.len(), 1);
        assert_eq!(trademark[0].severity, Severity::Warning);
        assert_eq!(trademark[0].location, Location::DocumentWide);
    }

    #[test]
    fn consistent_marked_usage_is_fine() {
        let text = "Total 30 Contact Lens® everywhere. Total 30 Contact Lens® again.";
        let issues = check_consistency(text, corpus());
        assert!(issues
            .iter()
            .all(|i| i.kind != IssueKind::InconsistentTrademark));
    }

    #[test]
    fn suggestion_recommends_the_more_frequent_variant() {
        let text = "Total 30 Contact Lens® and Total 30 Contact Lens® beat Total 30 Contact Lens.";
        let issues = check_consistency(text, corpus());
        assert!(issues[0].suggestion.contains("Total 30 Contact Lens®"));

        let text = "Total 30 Contact Lens and Total 30 Contact Lens beat Total 30 Contact Lens®.";
        let issues = check_consistency(text, corpus());
        assert!(issues[0].suggestion.contains("'Total 30 Contact Lens'"));
    }

    #[test]
    fn contradictory_line_is_warned() {
        let issues = check_consistency("Comfort never improves with other brands.", corpus());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::ContradictoryStatement);
        assert_eq!(issues[0].location, Location::Line(1));
    }

    #[test]
    fn safety_language_is_not_a_contradiction() {
        let issues =
            check_consistency("Lenses improve comfort; not for overnight wear.", corpus());
        assert!(issues.is_empty());
    }

    #[test]
    fn leading_negation_is_tolerated() {
        let issues = check_consistency("Do not expect it improves everything.", corpus());
        assert!(issues.is_empty());
    }
}
