//! # Reference Validation
//!
//! Classifies the document as referenced or not, then flags unsupported
//! claims accordingly. Referenced documents are trusted: only high-risk
//! claims (absolute or superlative language) with neither a reference mark
//! nor an inline evidentiary cue are flagged. Unreferenced documents are
//! held to the opposite standard: every substantial, non-descriptive,
//! unhedged claim candidate is flagged.

use once_cell::sync::Lazy;
use regex::Regex;

use mlr_core::{Issue, IssueKind, Location, Severity};
use mlr_corpus::references;

use crate::extract::{snippet_of, ClaimCandidate};
use crate::text::has_reference_mark;

static BRACKET_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\d+\]").expect("bracket reference pattern"));

static SUPERSCRIPT_REF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[¹²³⁴⁵⁶⁷⁸⁹⁰]").expect("superscript reference pattern"));

static REFERENCE_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:references|citations|sources):\s*\n").expect("section pattern"));

static DATA_SOURCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:data on file|clinical study|in a clinical|based on|data from|study showed)")
        .expect("data source pattern")
});

/// Absolute or superlative vocabulary that makes a claim high-risk.
static HIGH_RISK: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)\b(?:guaranteed|perfect|always|never|eliminates|cures)\b|100%")
            .expect("absolute high-risk pattern"),
        Regex::new(r"(?i)\b(?:best|only|first|superior|leading)\b")
            .expect("superlative high-risk pattern"),
    ]
});

static INLINE_EVIDENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:clinical|study|data|evidence|proven|research)").expect("evidence pattern")
});

static DESCRIPTIVE_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(?:the|this|these|it|product)").expect("descriptive pattern"));

static HEDGED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:may|can|might|could|designed to)").expect("hedge pattern"));

/// Citation density / structure threshold for treating a document as
/// referenced.
const MIN_REFERENCE_MARKS: usize = 3;

/// Minimum claim length considered substantial in unreferenced documents.
const MIN_SUBSTANTIAL_LENGTH: usize = 30;

/// True when the document carries a working reference system.
pub fn is_referenced_document(text: &str) -> bool {
    BRACKET_REF.find_iter(text).count() >= MIN_REFERENCE_MARKS
        || SUPERSCRIPT_REF.find_iter(text).count() >= MIN_REFERENCE_MARKS
        || REFERENCE_SECTION.is_match(text)
        || DATA_SOURCE.is_match(text)
}

/// Flag claim candidates that lack support, calibrated to whether the
/// document is referenced at all.
pub fn validate_references(text: &str, candidates: &[ClaimCandidate]) -> Vec<Issue> {
    let mut issues = Vec::new();
    let reference_url = references::url_for("ftc_advertising_substantiation");

    if is_referenced_document(text) {
        for candidate in candidates {
            let high_risk = HIGH_RISK.iter().any(|re| re.is_match(&candidate.text));
            if !high_risk {
                continue;
            }
            if has_reference_mark(&candidate.text) || INLINE_EVIDENCE.is_match(&candidate.text) {
                continue;
            }
            issues.push(
                Issue::new(
                    IssueKind::UnsupportedClaim,
                    Severity::Critical,
                    Location::Line(candidate.line),
                    "High-risk claim (absolute/superlative language) lacks reference",
                    "Add reference [#] or clinical study citation to support this strong claim",
                )
                .with_snippet(snippet_of(candidate))
                .with_reference_url(reference_url),
            );
        }
    } else {
        for candidate in candidates {
            if candidate.text.chars().count() < MIN_SUBSTANTIAL_LENGTH {
                continue;
            }
            if DESCRIPTIVE_START.is_match(&candidate.text) || HEDGED.is_match(&candidate.text) {
                continue;
            }
            issues.push(
                Issue::new(
                    IssueKind::UnsupportedClaim,
                    Severity::Critical,
                    Location::Line(candidate.line),
                    "Claim appears in material with no reference system",
                    "Add supporting references or clinical data sources throughout material",
                )
                .with_snippet(snippet_of(candidate))
                .with_reference_url(reference_url),
            );
        }
    }

    issues
}
